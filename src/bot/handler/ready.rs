//! Ready event handler for bot initialization.
//!
//! The `ready` event fires once the bot has authenticated with the gateway. Work that
//! needs a live connection happens here: guild languages are loaded from the database,
//! the database connection is checked, component interactions are enabled and the
//! presence shows how many servers the bot is in.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

use crate::{
    bot::component::ComponentRouter, service::language::LanguageService, state::BotState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Failures are logged and do not stop the bot: without language data every guild is
/// answered in the default language.
///
/// # Arguments
/// - `state` - Shared bot state holding the database and language cache
/// - `components` - Router enabled once language data is available
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information and guild list
pub async fn handle_ready(
    state: &BotState,
    components: &ComponentRouter,
    ctx: Context,
    ready: Ready,
) {
    match LanguageService::new(&state.db, &state.languages)
        .load_all()
        .await
    {
        Ok(count) => tracing::info!("Loaded language preferences for {} guild(s)", count),
        Err(e) => tracing::error!("Failed to load language preferences: {:?}", e),
    }

    match state.db.ping().await {
        Ok(()) => tracing::info!("Connected to the database"),
        Err(e) => tracing::error!("Failed to reach the database: {:?}", e),
    }

    components.enable();

    let guild_count = ready.guilds.len();
    tracing::info!(
        "{} is connected to Discord. Currently in {} servers",
        ready.user.name,
        guild_count
    );

    update_presence(&ctx, guild_count);
}

/// Shows "Watching N servers" as the bot's activity.
pub fn update_presence(ctx: &Context, guild_count: usize) {
    ctx.set_activity(Some(presence_activity(guild_count)));
}

fn presence_activity(guild_count: usize) -> ActivityData {
    ActivityData::watching(format!("{} servers", guild_count))
}
