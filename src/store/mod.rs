//! Backing-store clients.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     config → mysql.rs (pool) ─┐
//!     config → redis.rs (conn) ─┤→ AppState → request handlers
//! ```
//!
//! Handles are constructed once at startup, shared read-only across request
//! tasks, and released when the process exits. A connection failure here is
//! fatal; the server never starts with a missing dependency.

pub mod mysql;
pub mod redis;
