//! Generic Web-Service Scaffold
//!
//! Wires together configuration loading, structured logging, a MySQL
//! connection pool, a Redis client, HTTP route registration, and a
//! graceful-shutdown sequence.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                  SCAFFOLD                      │
//!                    │                                                │
//!   Client Request   │  ┌──────────┐   ┌────────────┐   ┌─────────┐  │
//!   ─────────────────┼─▶│lifecycle │──▶│ middleware │──▶│ routes  │  │
//!                    │  │ listener │   │ id/log/    │   │         │  │
//!                    │  └──────────┘   │ recovery   │   └────┬────┘  │
//!                    │                 └────────────┘        │       │
//!                    │                                       ▼       │
//!                    │                              ┌──────────────┐ │
//!                    │                              │   AppState   │ │
//!                    │                              │ mysql, redis │ │
//!                    │                              └──────────────┘ │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │           Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐  │ │
//!                    │  │  │ config │ │observability│ │lifecycle│  │ │
//!                    │  │  │ +reload│ │   logging   │ │shutdown │  │ │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘  │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────────┘
//! ```
//!
//! There is no business logic here. The one component with real contracts is
//! the lifecycle orchestrator: bring dependencies up in a fixed order, serve,
//! and on SIGINT/SIGTERM stop accepting while draining in-flight requests
//! within a bounded grace period.

// Core subsystems
pub mod config;
pub mod http;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::AppState;
pub use lifecycle::{Server, ServerState, Shutdown};
