//! Guild preference repository.
//!
//! Stores the language each guild talks to the bot in. Rows are keyed by the Discord guild
//! ID (stored as a string) and written with upsert semantics: joining a guild twice or
//! changing the language never creates a second row.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::{guild_preference::GuildPreference, language::Language};

pub struct GuildPreferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildPreferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the guild's preference or overwrites the stored language.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `language` - Language to store
    ///
    /// # Returns
    /// - `Ok(GuildPreference)` - The row as stored after the upsert
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(
        &self,
        guild_id: u64,
        language: Language,
    ) -> Result<GuildPreference, DbErr> {
        let entity = entity::prelude::GuildPreference::insert(
            entity::guild_preference::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                language: ActiveValue::Set(language.code().to_string()),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(entity::guild_preference::Column::GuildId)
                .update_columns([
                    entity::guild_preference::Column::Language,
                    entity::guild_preference::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildPreference::from_entity(entity)
    }

    /// Finds the preference stored for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildPreference))` - Preference found
    /// - `Ok(None)` - Guild has no stored preference
    /// - `Err(DbErr)` - Database error, or the stored row cannot be converted
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildPreference>, DbErr> {
        entity::prelude::GuildPreference::find()
            .filter(entity::guild_preference::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(GuildPreference::from_entity)
            .transpose()
    }

    /// Returns every stored row without conversion.
    ///
    /// Rows are returned raw so callers loading the whole table can skip individual rows
    /// with unknown language codes instead of failing the whole load.
    pub async fn get_all(&self) -> Result<Vec<entity::guild_preference::Model>, DbErr> {
        entity::prelude::GuildPreference::find().all(self.db).await
    }
}
