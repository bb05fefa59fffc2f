//! Service entry point.
//!
//! Startup order is fixed: config, logging, stores, routes, serve. Any
//! failure before serving is fatal; the server never starts half-wired.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use clap::Parser;

use web_scaffold::config::{self, watcher::ConfigWatcher};
use web_scaffold::http::{build_router, AppState};
use web_scaffold::lifecycle::Server;
use web_scaffold::observability::logging;
use web_scaffold::store;

#[derive(Parser, Debug)]
#[command(name = "web-scaffold", version, about = "Generic web-service scaffold")]
struct CliArgs {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliArgs::parse();

    // 1. Configuration
    let config = config::load_config(&cli.config)?;

    // 2. Logging
    logging::init(&config.log)?;
    tracing::debug!("logging initialized");

    // 3. Relational store
    let db = store::mysql::connect(&config.mysql).await?;

    // 4. Cache store
    let cache = store::redis::connect(&config.redis).await?;

    // 5. Config hot reload, for operator awareness only
    let config = Arc::new(config);
    let current = Arc::new(ArcSwap::from(config.clone()));
    let (watcher, updates) = ConfigWatcher::new(&cli.config);
    let _watcher_guard = match watcher.run() {
        Ok(guard) => Some(guard),
        Err(e) => {
            tracing::warn!(error = %e, "config watcher unavailable, hot reload disabled");
            None
        }
    };
    config::watcher::spawn_reload_task(updates, current);

    // 6. Routes
    let state = AppState::new(config.clone(), db, cache);
    let app = build_router(state);

    // 7. Serve with graceful shutdown; store handles are released after this
    //    returns, so no handler ever observes a closed pool mid-request.
    let grace = Duration::from_secs(config.app.shutdown_grace_secs);
    Server::new(config.app.name.clone(), grace)
        .serve_with_signals(app, &config.app.bind_address)
        .await;

    Ok(())
}
