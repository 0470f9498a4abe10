mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    bot::{command::catalog, registry::CommandRegistry},
    config::Config,
    error::AppError,
    service::language::LanguageCache,
    state::BotState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logging(config.log_level)?;
    tracing::info!("Starting in {:?} deployment", config.deployment);

    let registry = Arc::new(CommandRegistry::load(catalog())?);
    tracing::info!("Loaded {} command(s): {}", registry.len(), registry.names().join(", "));
    if !registry.skipped().is_empty() {
        tracing::warn!(
            "Skipped {} malformed command module(s): {}",
            registry.skipped().len(),
            registry.skipped().join(", ")
        );
    }
    if registry.is_empty() {
        tracing::warn!("No commands loaded, every registered command will be removed");
    }

    bot::start::register_commands(&config, &registry).await;

    let db = startup::connect_to_database(&config).await?;

    let config = Arc::new(config);
    let state = BotState::new(db, LanguageCache::new(), config.clone());

    let client = bot::start::init_bot(&config, registry, state).await?;

    bot::start::start_bot(client).await
}
