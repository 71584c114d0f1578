//! Database pool creation and schema migrations

use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Open a pool for `config.url` and bring the schema up to date.
///
/// In-memory databases live only as long as their connection, so they are
/// pinned to a single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> AppResult<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_memory(&config.url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_with(options)
            .await?
    };

    migrate(&pool).await?;
    Ok(pool)
}

/// Apply pending migrations from `./migrations`
pub async fn migrate(pool: &Pool<Sqlite>) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Database migrations completed");
    Ok(())
}

/// Convenience for tests and ephemeral runs
pub async fn connect_in_memory() -> AppResult<Pool<Sqlite>> {
    connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    })
    .await
}

fn is_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
