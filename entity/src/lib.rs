//! SeaORM entity models for the bot's persistent tables.

pub mod prelude;

pub mod guild_preference;
