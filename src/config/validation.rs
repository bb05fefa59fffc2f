//! Configuration validation.
//!
//! Serde already rejects syntactic problems; this module covers semantic
//! ones. All violations are collected and returned together, not just the
//! first, so an operator can fix a config file in one pass.

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic violation found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Bind address does not parse as host:port.
    InvalidBindAddress(String),
    /// Log level is not one of the known names.
    UnknownLogLevel(String),
    /// Pool bounds are zero or inverted.
    InvalidPoolBounds { max_idle: u32, max_open: u32 },
    /// A port field is zero.
    ZeroPort(&'static str),
    /// A required string field is empty.
    EmptyField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "app.bind_address {:?} is not a valid socket address", addr)
            }
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "log.level {:?} is not one of {}", level, LOG_LEVELS.join("/"))
            }
            ValidationError::InvalidPoolBounds { max_idle, max_open } => {
                write!(
                    f,
                    "mysql pool bounds invalid: max_idle_conns {} must be <= max_open_conns {} and max_open_conns must be > 0",
                    max_idle, max_open
                )
            }
            ValidationError::ZeroPort(field) => write!(f, "{} must not be 0", field),
            ValidationError::EmptyField(field) => write!(f, "{} must not be empty", field),
        }
    }
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.app.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.app.bind_address.clone(),
        ));
    }
    if config.app.name.is_empty() {
        errors.push(ValidationError::EmptyField("app.name"));
    }

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.log.level.clone()));
    }

    if config.mysql.max_open_conns == 0
        || config.mysql.max_idle_conns > config.mysql.max_open_conns
    {
        errors.push(ValidationError::InvalidPoolBounds {
            max_idle: config.mysql.max_idle_conns,
            max_open: config.mysql.max_open_conns,
        });
    }
    if config.mysql.port == 0 {
        errors.push(ValidationError::ZeroPort("mysql.port"));
    }
    if config.redis.port == 0 {
        errors.push(ValidationError::ZeroPort("redis.port"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::AppConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = AppConfig::default();
        config.app.bind_address = "not-an-address".into();
        config.log.level = "loud".into();
        config.mysql.max_open_conns = 0;
        config.redis.port = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_inverted_pool_bounds_rejected() {
        let mut config = AppConfig::default();
        config.mysql.max_idle_conns = 50;
        config.mysql.max_open_conns = 10;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidPoolBounds {
                max_idle: 50,
                max_open: 10
            }]
        );
    }
}
