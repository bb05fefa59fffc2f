//! Server lifecycle orchestration.
//!
//! # Responsibilities
//! - Bind the listener and dispatch each connection on its own task
//! - Block on the shutdown coordinator until an operator requests exit
//! - Stop accepting immediately on shutdown, then drain in-flight requests
//!   within a bounded grace period
//!
//! # Design Decisions
//! - A bind or serve failure is logged, not fatal: the orchestrator keeps
//!   waiting for the shutdown request instead of taking the process down
//! - The grace-period timeout stops waiting for in-flight work; it never
//!   interrupts it

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::lifecycle::{signals, Shutdown};

/// Lifecycle states of the serving socket.
///
/// A handle is `Stopped` until its listener binds, then transitions
/// `Running → ShuttingDown → Stopped` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Accepting and serving requests.
    Running,
    /// No longer accepting; draining in-flight requests.
    ShuttingDown,
    /// Socket closed, control returned to the caller.
    Stopped,
}

/// Owns the listening socket and drives the shutdown state machine.
pub struct Server {
    name: String,
    grace_period: Duration,
    shutdown: Shutdown,
    state_tx: Arc<watch::Sender<ServerState>>,
}

impl Server {
    /// Create a server handle with the given service name and grace period.
    pub fn new(name: impl Into<String>, grace_period: Duration) -> Self {
        let (state_tx, _) = watch::channel(ServerState::Stopped);
        Self {
            name: name.into(),
            grace_period,
            shutdown: Shutdown::new(),
            state_tx: Arc::new(state_tx),
        }
    }

    /// Coordinator used to request shutdown programmatically.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Observe lifecycle state transitions.
    pub fn state(&self) -> watch::Receiver<ServerState> {
        self.state_tx.subscribe()
    }

    /// Serve until a termination signal arrives, then drain and return.
    ///
    /// Registers the OS signal listener first; use [`Server::serve`] when the
    /// caller wires its own trigger.
    pub async fn serve_with_signals(self, app: Router, bind_address: &str) {
        signals::spawn_signal_listener(self.shutdown.clone());
        self.serve(app, bind_address).await;
    }

    /// Serve until the shutdown coordinator fires, then drain and return.
    pub async fn serve(self, app: Router, bind_address: &str) {
        let serve_task = self.spawn_serve_task(app, bind_address.to_string());

        // Suspends indefinitely; an operator request is the only way forward.
        self.shutdown.wait().await;

        self.transition(ServerState::ShuttingDown);
        tracing::info!(service = %self.name, "shutting down, draining in-flight requests");

        // Bounded drain. On timeout the serve task is dropped, not aborted:
        // remaining requests are abandoned and die with the process.
        match tokio::time::timeout(self.grace_period, serve_task).await {
            Ok(_) => {}
            Err(_) => {
                tracing::error!(
                    service = %self.name,
                    grace_secs = self.grace_period.as_secs(),
                    "grace period elapsed before drain completed, abandoning in-flight requests"
                );
            }
        }

        self.transition(ServerState::Stopped);
        tracing::info!(service = %self.name, "exiting");
    }

    /// Listener task: bind, then serve with graceful shutdown.
    fn spawn_serve_task(&self, app: Router, bind_address: String) -> JoinHandle<()> {
        let name = self.name.clone();
        let state_tx = self.state_tx.clone();
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            let listener = match TcpListener::bind(&bind_address).await {
                Ok(listener) => listener,
                Err(e) => {
                    tracing::error!(
                        service = %name,
                        address = %bind_address,
                        error = %e,
                        "listen failed"
                    );
                    return;
                }
            };

            let _ = state_tx.send(ServerState::Running);
            tracing::info!(service = %name, address = %bind_address, "listening");

            let served = axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await;

            if let Err(e) = served {
                tracing::error!(service = %name, error = %e, "serve failed");
            }
        })
    }

    fn transition(&self, next: ServerState) {
        let _ = self.state_tx.send(next);
    }
}
