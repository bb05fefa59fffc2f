//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → atomic swap of Arc<AppConfig>, change is logged
//!     → running subsystems keep the handles they were built with
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; reloads only swap the shared snapshot
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::LogConfig;
pub use schema::MysqlConfig;
pub use schema::RedisConfig;
pub use schema::ServiceConfig;
