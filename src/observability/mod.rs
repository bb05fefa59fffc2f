//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → console (pretty or JSON)
//!     → rolling info file (routine records)
//!     → rolling error file (warn and above)
//! ```
//!
//! # Design Decisions
//! - One registry, three sinks; per-sink level filters
//! - Level comes from config, RUST_LOG overrides for ad-hoc debugging
//! - Access log records are ordinary tracing events under the "access" target

pub mod logging;
