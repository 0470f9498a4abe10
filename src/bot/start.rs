//! Connecting the bot to Discord.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents, Http};

use crate::{
    bot::{
        dispatch::Dispatcher,
        handler::Handler,
        publish::publish_commands,
        registry::CommandRegistry,
    },
    config::Config,
    error::AppError,
    state::BotState,
};

/// Publishes the registry's command definitions before the gateway connection opens.
///
/// Uses a standalone HTTP client because the gateway client does not exist yet. A
/// failure is logged and startup continues.
pub async fn register_commands(config: &Config, registry: &CommandRegistry) -> Option<usize> {
    let http = Http::new(&config.bot_token);
    http.set_application_id(config.application_id);

    publish_commands(&http, config.publish_scope, registry.definitions()).await
}

/// Builds the gateway client.
///
/// The bot only needs guild events and interactions; message content is never read.
///
/// # Arguments
/// - `config` - Credentials for the selected deployment
/// - `registry` - Commands the dispatcher will route to
/// - `state` - Shared state handed to every handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(
    config: &Config,
    registry: Arc<CommandRegistry>,
    state: BotState,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let handler = Handler::new(state.clone(), Dispatcher::new(registry, state));

    let client = Client::builder(&config.bot_token, intents)
        .application_id(config.application_id)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the gateway connection, returning only when it stops.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

