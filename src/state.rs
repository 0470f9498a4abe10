//! State shared by every event and command handler.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::Config, service::language::LanguageCache};

/// Resources handed to handlers.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `LanguageCache` and `Arc<Config>` are reference-counted
#[derive(Clone)]
pub struct BotState {
    /// Database connection pool for the guild preference table.
    pub db: DatabaseConnection,

    /// In-memory guild languages, loaded on ready.
    pub languages: LanguageCache,

    /// Configuration read at startup.
    pub config: Arc<Config>,
}

impl BotState {
    pub fn new(db: DatabaseConnection, languages: LanguageCache, config: Arc<Config>) -> Self {
        Self {
            db,
            languages,
            config,
        }
    }
}
