//! Shared utilities for lifecycle integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use web_scaffold::lifecycle::{Server, ServerState, Shutdown};

/// Router with an instant route and a slow route that sleeps before replying.
pub fn test_router(slow_delay: Duration) -> Router {
    Router::new()
        .route("/fast", get(|| async { "ok" }))
        .route(
            "/slow",
            get(move || async move {
                tokio::time::sleep(slow_delay).await;
                "done"
            }),
        )
}

/// A server under test plus the handles needed to drive and observe it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub state: watch::Receiver<ServerState>,
    pub handle: JoinHandle<()>,
}

/// Start a server on a fixed port and wait until it is accepting.
pub async fn start_server(port: u16, grace: Duration, slow_delay: Duration) -> TestServer {
    let addr: SocketAddr = format!("127.0.0.1:{port}").parse().unwrap();
    let server = Server::new("test-server", grace);
    let shutdown = server.shutdown_handle();
    let mut state = server.state();
    let app = test_router(slow_delay);

    let bind = addr.to_string();
    let handle = tokio::spawn(async move { server.serve(app, &bind).await });

    state
        .wait_for(|s| *s == ServerState::Running)
        .await
        .expect("server dropped before reaching Running");

    TestServer {
        addr,
        shutdown,
        state,
        handle,
    }
}

/// HTTP client that talks to the local server only.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
