use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Which variables are required depends on the deployment the binary was built for.
    /// Check the `.env.example` file for the full list.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    ///
    /// Ids must be non-zero Discord snowflakes and `LOG_LEVEL` must name a tracing level.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// The global log subscriber could not be installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(String),
}
