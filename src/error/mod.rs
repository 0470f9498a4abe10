//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup, repositories, services and
//! command handlers. Event handlers never propagate it: they log it and, for commands,
//! turn it into the generic failure reply.

pub mod config;
pub mod registry;

use thiserror::Error;

use crate::error::{config::ConfigError, registry::RegistryError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The command catalog is inconsistent.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failed to serialize a builder to JSON.
    #[error(transparent)]
    SerializeErr(#[from] serde_json::Error),

    /// Failed to build a URL.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// A guild-only command was used outside of a guild.
    #[error("This command can only be used in a server")]
    NotInGuild,

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
