//! Slash command catalog.
//!
//! Commands are grouped into categories, one submodule per category and one file per
//! command. Each command file exposes a `module()` function returning its
//! [`CommandModule`]: the definition published to Discord and the handler the dispatcher
//! calls. [`catalog`] lists every category and is the only input of the command registry.

pub mod config;
pub mod general;

use std::sync::Arc;

use serenity::all::CreateCommand;
use serenity::async_trait;

use crate::{
    bot::interaction::CommandResponder, error::AppError, model::language::Language,
    state::BotState,
};

/// Executes one slash command.
///
/// Implementations are expected to reply to or defer the interaction themselves. An
/// `Err` is logged by the dispatcher and answered with a generic failure message.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        state: &BotState,
        interaction: &dyn CommandResponder,
    ) -> Result<(), AppError>;
}

/// A command file: its definition and its handler.
///
/// Both halves are optional so an incomplete module is caught by the registry, logged,
/// and left out of both dispatch and publishing.
pub struct CommandModule {
    /// Location in the catalog, e.g. `general/ping`, used in log lines.
    pub path: &'static str,
    pub definition: Option<CreateCommand>,
    pub handler: Option<Arc<dyn CommandHandler>>,
}

impl CommandModule {
    pub fn new(
        path: &'static str,
        definition: CreateCommand,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        Self {
            path,
            definition: Some(definition),
            handler: Some(Arc::new(handler)),
        }
    }
}

pub struct CommandCategory {
    pub name: &'static str,
    pub modules: Vec<CommandModule>,
}

/// Every command category compiled into the bot.
pub fn catalog() -> Vec<CommandCategory> {
    vec![general::category(), config::category()]
}

/// Language to answer in: the guild's preference, or the default outside of guilds.
pub async fn language_for(state: &BotState, interaction: &dyn CommandResponder) -> Language {
    match interaction.guild_id() {
        Some(guild_id) => state.languages.get(guild_id.get()).await,
        None => Language::default(),
    }
}
