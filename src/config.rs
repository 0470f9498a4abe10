use dioxus_logger::tracing::Level;
use serenity::all::{ApplicationId, ChannelId, GuildId};
use url::Url;

use crate::bot::publish::PublishScope;
use crate::error::{config::ConfigError, AppError};

/// Which credential set and publish target the bot runs against.
///
/// Selected at compile time by the `production` cargo feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Test,
    Production,
}

impl Deployment {
    /// The deployment this binary was built for.
    pub const fn current() -> Self {
        if cfg!(feature = "production") {
            Self::Production
        } else {
            Self::Test
        }
    }
}

/// Guild and channel receiving operator notifications on guild join/leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogChannel {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
}

pub struct Config {
    pub deployment: Deployment,
    pub database_url: String,

    pub bot_token: String,
    pub application_id: ApplicationId,
    pub publish_scope: PublishScope,

    pub log_channel: Option<LogChannel>,
    pub support_url: Option<Url>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(Deployment::current(), |name| std::env::var(name).ok())
    }

    /// Builds the configuration for `deployment` from an arbitrary variable source.
    ///
    /// The test deployment reads `TEST_TOKEN`, `TEST_CLIENT_ID` and `TEST_GUILD_ID` and
    /// publishes commands to that guild only. Production reads `PROD_TOKEN` and
    /// `PROD_CLIENT_ID` and publishes globally.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or an id is not a snowflake
    pub fn from_lookup<F>(deployment: Deployment, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let (bot_token, application_id, publish_scope) = match deployment {
            Deployment::Test => {
                let token = required("TEST_TOKEN")?;
                let app_id = parse_id("TEST_CLIENT_ID", required("TEST_CLIENT_ID")?)?;
                let guild_id = parse_id("TEST_GUILD_ID", required("TEST_GUILD_ID")?)?;
                (
                    token,
                    ApplicationId::new(app_id),
                    PublishScope::Guild(GuildId::new(guild_id)),
                )
            }
            Deployment::Production => {
                let token = required("PROD_TOKEN")?;
                let app_id = parse_id("PROD_CLIENT_ID", required("PROD_CLIENT_ID")?)?;
                (token, ApplicationId::new(app_id), PublishScope::Global)
            }
        };

        // Blank optional values count as unset.
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let log_channel = match (optional("LOG_GUILD_ID"), optional("LOG_CHANNEL_ID")) {
            (Some(guild), Some(channel)) => Some(LogChannel {
                guild_id: GuildId::new(parse_id("LOG_GUILD_ID", guild)?),
                channel_id: ChannelId::new(parse_id("LOG_CHANNEL_ID", channel)?),
            }),
            _ => None,
        };

        let log_level = match optional("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    value,
                })?,
            None => Level::INFO,
        };

        let support_url = match optional("SUPPORT_URL") {
            Some(value) => Some(Url::parse(value.trim()).map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "SUPPORT_URL".to_string(),
                    value,
                }
            })?),
            None => None,
        };

        Ok(Self {
            deployment,
            database_url: required("DATABASE_URL")?,
            bot_token,
            application_id,
            publish_scope,
            log_channel,
            support_url,
            log_level,
        })
    }
}

/// Parses a Discord snowflake; zero is rejected because serenity ids are non-zero.
fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
