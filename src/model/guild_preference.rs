use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::language::Language;

/// Language preference stored for a single guild.
///
/// Param model used by the service layer so it does not depend on the entity crate.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildPreference {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Selected language. Unknown stored codes are kept out of this type; see `from_entity`.
    pub language: Language,
    pub updated_at: DateTime<Utc>,
}

impl GuildPreference {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildPreference)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - guild_id is not a u64 or the language code is unknown
    pub fn from_entity(entity: entity::guild_preference::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let language = entity
            .language
            .parse::<Language>()
            .map_err(|e| DbErr::Custom(format!("Guild {}: {}", guild_id, e)))?;

        Ok(Self {
            guild_id,
            language,
            updated_at: entity.updated_at,
        })
    }
}
