//! Redis client construction.

use redis::aio::MultiplexedConnection;

use crate::config::RedisConfig;

/// Open a connection from config and verify it with a PING.
pub async fn connect(config: &RedisConfig) -> Result<MultiplexedConnection, redis::RedisError> {
    let client = redis::Client::open(config.url())?;
    let mut conn = client.get_multiplexed_async_connection().await?;

    let _: String = redis::cmd("PING").query_async(&mut conn).await?;

    tracing::debug!(host = %config.host, db = config.db, "redis connection established");
    Ok(conn)
}
