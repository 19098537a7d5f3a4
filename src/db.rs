//! SQLite pool setup and schema migrations

use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

/// Open the pool, creating the database file if it does not exist
pub async fn connect(config: &DatabaseConfig) -> AppResult<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    // `sqlite::memory:` lives only as long as its connection, so never recycle
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    tracing::debug!("Opened database pool for {}", config.url);
    Ok(pool)
}

/// Apply the embedded migrations
pub async fn migrate(pool: &Pool<Sqlite>) -> AppResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;
    tracing::info!("Database migrations completed");
    Ok(())
}

/// Connect and migrate in one step
pub async fn init(config: &DatabaseConfig) -> AppResult<Pool<Sqlite>> {
    let pool = connect(config).await?;
    migrate(&pool).await?;
    Ok(pool)
}
