//! HTTP surface: application state, middleware, route registration.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → middleware.rs (panic recovery, request id, access log)
//!     → registered routes (health, business handlers)
//!     → response
//! ```

pub mod middleware;
pub mod server;

pub use server::{build_router, AppState};
