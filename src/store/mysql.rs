//! MySQL connection pool construction.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::MysqlConfig;

/// Build a connection pool from config and verify connectivity.
pub async fn connect(config: &MysqlConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_open_conns)
        .min_connections(config.max_idle_conns)
        .max_lifetime(Duration::from_secs(3600))
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url())
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    tracing::debug!(
        host = %config.host,
        database = %config.dbname,
        max_open = config.max_open_conns,
        "mysql pool established"
    );
    Ok(pool)
}
