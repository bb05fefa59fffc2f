//! Structured logging initialization.
//!
//! Console output plus two rolling files: one for routine records, one for
//! warnings and errors. The appender rotates by day; `max_backups` bounds how
//! many rotated files are kept per sink.

use std::path::Path;

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LogConfig;

/// Error type for logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unknown log level {0:?}")]
    UnknownLevel(String),

    #[error("log file setup failed: {0}")]
    File(#[from] InitError),
}

/// Install the global tracing subscriber.
///
/// The configured level is the default; `RUST_LOG` overrides it when set.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let level = parse_level(&config.level)?;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let info_writer = rolling_appender(&config.info_file, config.max_backups)?;
    let error_writer = rolling_appender(&config.error_file, config.max_backups)?;

    let info_layer = fmt::layer().with_ansi(false).with_writer(info_writer);
    let error_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(error_writer)
        .with_filter(LevelFilter::WARN);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(info_layer)
        .with(error_layer);

    if config.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| LoggingError::UnknownLevel(level.to_string()))
}

fn rolling_appender(path: &str, max_backups: usize) -> Result<RollingFileAppender, LoggingError> {
    let path = Path::new(path);
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app.log".to_string());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(max_backups.max(1))
        .build(directory)?;
    Ok(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels_parse() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(parse_level(level).is_ok());
        }
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(matches!(
            parse_level("loud"),
            Err(LoggingError::UnknownLevel(_))
        ));
    }
}
