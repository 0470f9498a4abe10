//! Discord bot: commands, interaction routing and gateway events.
//!
//! Startup builds a [`registry::CommandRegistry`] from the compiled-in command catalog,
//! publishes its definitions with [`publish`], then opens the gateway connection in
//! [`start`]. From there [`handler`] receives events: slash commands go through the
//! [`dispatch::Dispatcher`], select menus through the [`component::ComponentRouter`], and
//! guild joins and leaves post onboarding and operator log messages.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild create and delete events, and the guild cache
//! - `GUILD_MESSAGES` - Posting onboarding messages
//! - `GUILD_MESSAGE_REACTIONS` - Reactions on bot messages
//!
//! None of these are privileged.

pub mod command;
pub mod component;
pub mod dispatch;
pub mod embed;
pub mod handler;
pub mod interaction;
pub mod locale;
pub mod operator_log;
pub mod publish;
pub mod registry;
pub mod start;

#[cfg(test)]
pub mod test_support;
