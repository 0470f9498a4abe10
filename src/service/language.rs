//! Guild language preferences.
//!
//! This module provides the in-memory `LanguageCache` consulted on every reply and the
//! `LanguageService` that keeps the cache and the `guild_preference` table in step. The
//! cache is filled from the database when the bot becomes ready and afterwards updated
//! on guild join and whenever a guild changes its language.

use std::collections::HashMap;
use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::{
    data::guild_preference::GuildPreferenceRepository, error::AppError,
    model::language::Language,
};

/// Shared guild → language map.
///
/// Cloning is cheap and every clone refers to the same map.
#[derive(Clone, Default)]
pub struct LanguageCache {
    languages: Arc<RwLock<HashMap<u64, Language>>>,
}

impl LanguageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the guild's language, or the default language if none is known.
    pub async fn get(&self, guild_id: u64) -> Language {
        self.languages
            .read()
            .await
            .get(&guild_id)
            .copied()
            .unwrap_or_default()
    }

    pub async fn set(&self, guild_id: u64, language: Language) {
        self.languages.write().await.insert(guild_id, language);
    }

    /// Replaces the whole map with `entries`.
    pub async fn load(&self, entries: impl IntoIterator<Item = (u64, Language)>) {
        let mut languages = self.languages.write().await;
        languages.clear();
        languages.extend(entries);
    }
}

pub struct LanguageService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a LanguageCache,
}

impl<'a> LanguageService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a LanguageCache) -> Self {
        Self { db, cache }
    }

    /// Loads every stored preference into the cache.
    ///
    /// Rows with an unparsable guild id or an unknown language code are logged and skipped;
    /// those guilds use the default language until they choose another one.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of guilds loaded into the cache
    /// - `Err(AppError::DbErr)` - Failed to read the table
    pub async fn load_all(&self) -> Result<usize, AppError> {
        let rows = GuildPreferenceRepository::new(self.db).get_all().await?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let Ok(guild_id) = row.guild_id.parse::<u64>() else {
                tracing::warn!("Skipping preference with invalid guild id '{}'", row.guild_id);
                continue;
            };
            match row.language.parse::<Language>() {
                Ok(language) => entries.push((guild_id, language)),
                Err(e) => tracing::warn!("Skipping preference for guild {}: {}", guild_id, e),
            }
        }

        let loaded = entries.len();
        self.cache.load(entries).await;

        Ok(loaded)
    }

    /// Resets the guild to the default language, in memory and in the database.
    ///
    /// Called when the bot joins a guild. Any previously stored preference is overwritten.
    pub async fn set_default(&self, guild_id: u64) -> Result<(), AppError> {
        self.set(guild_id, Language::default()).await
    }

    /// Stores a new language for the guild.
    ///
    /// The cache is updated before the database write so replies switch language even if
    /// the write fails; the error is still returned to the caller.
    pub async fn set(&self, guild_id: u64, language: Language) -> Result<(), AppError> {
        self.cache.set(guild_id, language).await;

        GuildPreferenceRepository::new(self.db)
            .upsert(guild_id, language)
            .await?;

        tracing::debug!("Guild {} language set to {}", guild_id, language);

        Ok(())
    }

    pub async fn get(&self, guild_id: u64) -> Language {
        self.cache.get(guild_id).await
    }
}
