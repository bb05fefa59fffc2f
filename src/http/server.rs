//! Router assembly and shared application state.
//!
//! # Responsibilities
//! - Hold the handles every request task shares (config, MySQL, Redis)
//! - Build the Axum router with middleware layered ahead of business routes
//!
//! Business routes are the scaffold user's job; the router ships with the
//! health probe only.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use redis::aio::MultiplexedConnection;
use sqlx::MySqlPool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};

use crate::config::AppConfig;
use crate::http::middleware::{self, MakeRequestUuid};

/// Application state injected into handlers.
///
/// Constructed once at startup. Every field is a cheap-clone handle shared
/// read-only across request tasks; the stores coordinate their own
/// concurrency internally.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: MySqlPool,
    pub cache: MultiplexedConnection,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db: MySqlPool, cache: MultiplexedConnection) -> Self {
        Self { config, db, cache }
    }
}

/// Build the router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::access_log))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CatchPanicLayer::new())
}

/// Liveness probe.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.config.app.name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
