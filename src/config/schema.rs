//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Service identity and listener settings.
    pub app: ServiceConfig,

    /// Logging output settings.
    pub log: LogConfig,

    /// Relational store (MySQL) pool settings.
    pub mysql: MysqlConfig,

    /// Cache store (Redis) settings.
    pub redis: RedisConfig,
}

/// Service identity and listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Human-readable service name, used in logs.
    pub name: String,

    /// Bind address (e.g., "0.0.0.0:8081").
    pub bind_address: String,

    /// Seconds granted to in-flight requests once shutdown begins.
    pub shutdown_grace_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "web-scaffold".to_string(),
            bind_address: "0.0.0.0:8081".to_string(),
            shutdown_grace_secs: 2,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level recorded ("trace", "debug", "info", "warn", "error").
    pub level: String,

    /// Emit console output as JSON instead of human-readable lines.
    pub json: bool,

    /// File receiving routine records.
    pub info_file: String,

    /// File receiving warnings and errors.
    pub error_file: String,

    /// Rotate once a file reaches this size in megabytes.
    pub max_size_mb: u64,

    /// Rotated files kept per sink before the oldest is deleted.
    pub max_backups: usize,

    /// Days a rotated file is retained.
    pub max_age_days: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            info_file: "logs/app.log".to_string(),
            error_file: "logs/error.log".to_string(),
            max_size_mb: 100,
            max_backups: 7,
            max_age_days: 30,
        }
    }
}

/// MySQL connection pool configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MysqlConfig {
    /// Server hostname or IP.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Account name.
    pub user: String,

    /// Account password.
    pub password: String,

    /// Database to use.
    pub dbname: String,

    /// Idle connections the pool keeps warm.
    pub max_idle_conns: u32,

    /// Upper bound on open connections.
    pub max_open_conns: u32,
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            dbname: "web_scaffold".to_string(),
            max_idle_conns: 10,
            max_open_conns: 100,
        }
    }
}

impl MysqlConfig {
    /// Connection URL in the form the sqlx driver expects.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}

/// Redis connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Server hostname or IP.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Password, empty when the server has no auth.
    pub password: String,

    /// Logical database index.
    pub db: i64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: String::new(),
            db: 0,
        }
    }
}

impl RedisConfig {
    /// Connection URL in the form the redis client expects.
    pub fn url(&self) -> String {
        if self.password.is_empty() {
            format!("redis://{}:{}/{}", self.host, self.port, self.db)
        } else {
            format!(
                "redis://:{}@{}:{}/{}",
                self.password, self.host, self.port, self.db
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.app.name, "web-scaffold");
        assert_eq!(config.app.shutdown_grace_secs, 2);
        assert_eq!(config.mysql.port, 3306);
        assert_eq!(config.redis.port, 6379);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            name = "orders"
            bind_address = "127.0.0.1:9000"

            [mysql]
            host = "db.internal"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.name, "orders");
        assert_eq!(config.app.shutdown_grace_secs, 2);
        assert_eq!(config.mysql.host, "db.internal");
        assert_eq!(config.mysql.user, "root");
    }

    #[test]
    fn test_mysql_url_includes_all_parts() {
        let config = MysqlConfig {
            user: "svc".into(),
            password: "secret".into(),
            host: "db".into(),
            port: 3307,
            dbname: "orders".into(),
            ..MysqlConfig::default()
        };
        assert_eq!(config.url(), "mysql://svc:secret@db:3307/orders");
    }

    #[test]
    fn test_redis_url_omits_empty_password() {
        let config = RedisConfig::default();
        assert_eq!(config.url(), "redis://127.0.0.1:6379/0");

        let with_auth = RedisConfig {
            password: "hunter2".into(),
            ..RedisConfig::default()
        };
        assert_eq!(with_auth.url(), "redis://:hunter2@127.0.0.1:6379/0");
    }
}
