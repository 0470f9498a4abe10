//! Shared fixtures for bot tests.

use std::sync::Arc;

use dioxus_logger::tracing::Level;
use serenity::all::{ApplicationId, GuildId};
use test_utils::builder::TestBuilder;
use url::Url;

use crate::{
    bot::publish::PublishScope,
    config::{Config, Deployment},
    service::language::LanguageCache,
    state::BotState,
};

pub fn test_config() -> Config {
    Config {
        deployment: Deployment::Test,
        database_url: "sqlite::memory:".to_string(),
        bot_token: "test-token".to_string(),
        application_id: ApplicationId::new(123456789),
        publish_scope: PublishScope::Guild(GuildId::new(1)),
        log_channel: None,
        support_url: Url::parse("https://discord.gg/irrverbs").ok(),
        log_level: Level::INFO,
    }
}

/// State backed by an in-memory database with the preference table and an empty cache.
pub async fn test_state() -> BotState {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    BotState::new(db, LanguageCache::new(), Arc::new(test_config()))
}
