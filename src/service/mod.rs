//! Business logic shared by command and event handlers.

pub mod language;
