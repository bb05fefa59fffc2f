//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Connect stores → Build router → serve
//!
//! Shutdown (server.rs):
//!     Signal received → Stop accepting → Drain in-flight (bounded) → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger shutdown coordinator
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then logging, then stores, then listener
//! - Ordered shutdown: stop accept, drain, close
//! - Drain is bounded: once the grace period elapses, remaining in-flight
//!   requests are abandoned (not interrupted) and the process moves on

pub mod server;
pub mod shutdown;
pub mod signals;

pub use server::{Server, ServerState};
pub use shutdown::Shutdown;
