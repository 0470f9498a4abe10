//! Gateway event handling.
//!
//! `Handler` implements serenity's `EventHandler` and forwards each event to the
//! function in the submodule of the same name, passing along the shared state.

use serenity::all::{Context, EventHandler, Guild, Interaction, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::{
    bot::{component::ComponentRouter, dispatch::Dispatcher},
    state::BotState,
};

pub mod guild;
pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
    pub dispatcher: Dispatcher,
    pub components: ComponentRouter,
}

impl Handler {
    pub fn new(state: BotState, dispatcher: Dispatcher) -> Self {
        Self {
            components: ComponentRouter::new(state.clone()),
            state,
            dispatcher,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, &self.components, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.state, ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.state, ctx, incomplete, full).await;
    }

    /// Called for slash commands and message components
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.dispatcher, &self.components, ctx, interaction)
            .await;
    }
}
