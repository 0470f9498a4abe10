//! Guild preference factory for creating test preference rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild preferences with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_preference::GuildPreferenceFactory;
///
/// let preference = GuildPreferenceFactory::new(&db)
///     .guild_id("987654321")
///     .language("french")
///     .build()
///     .await?;
/// ```
pub struct GuildPreferenceFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    language: String,
}

impl<'a> GuildPreferenceFactory<'a> {
    /// Creates a new GuildPreferenceFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented number as string
    /// - language: `"english"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            language: "english".to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the stored language code.
    ///
    /// Any string is accepted so tests can insert codes the bot does not recognize.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builds and inserts the preference row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_preference::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_preference::Model, DbErr> {
        entity::guild_preference::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            language: ActiveValue::Set(self.language),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild preference with default values.
///
/// Shorthand for `GuildPreferenceFactory::new(db).build().await`.
pub async fn create_guild_preference(
    db: &DatabaseConnection,
) -> Result<entity::guild_preference::Model, DbErr> {
    GuildPreferenceFactory::new(db).build().await
}
