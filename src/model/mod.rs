//! Domain models shared by the data, service and bot layers.

pub mod guild_preference;
pub mod language;
