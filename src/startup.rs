use dioxus_logger::tracing::Level;

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber at the configured level.
pub fn init_logging(level: Level) -> Result<(), AppError> {
    dioxus_logger::init(level).map_err(|e| ConfigError::Logger(e.to_string()))?;

    Ok(())
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `guild_preference` table exists before the
/// first event arrives. Handlers check connections out of this pool per operation.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
