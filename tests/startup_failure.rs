//! Startup failures are fatal and happen before any listener exists.

use std::time::{Duration, Instant};

use web_scaffold::config::{MysqlConfig, RedisConfig};
use web_scaffold::store;

#[tokio::test]
async fn test_unreachable_mysql_is_a_startup_error() {
    let config = MysqlConfig {
        host: "127.0.0.1".into(),
        // Nothing listens here.
        port: 59997,
        ..MysqlConfig::default()
    };

    let started = Instant::now();
    let result = store::mysql::connect(&config).await;

    assert!(result.is_err());
    assert!(
        started.elapsed() < Duration::from_secs(10),
        "a refused connection should fail fast, not hang"
    );
}

#[tokio::test]
async fn test_unreachable_redis_is_a_startup_error() {
    let config = RedisConfig {
        host: "127.0.0.1".into(),
        port: 59998,
        ..RedisConfig::default()
    };

    assert!(store::redis::connect(&config).await.is_err());
}
