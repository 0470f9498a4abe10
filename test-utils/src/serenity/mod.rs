//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return, so handler logic can be tested without a gateway.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_guild};
//! use serenity::all::ChannelType;
//!
//! let mut guild = create_test_guild(123456789, "Test Guild", 42);
//! let general = create_test_channel(111, 123456789, "general", ChannelType::Text, 0);
//! guild.channels.insert(general.id, general);
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod guild;

pub use channel::create_test_channel;
pub use guild::{create_test_guild, create_test_guild_with_channels};
