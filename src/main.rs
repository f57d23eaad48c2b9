//! Activity Roster - Binary Entry Point
//!
//! This is the main entry point for the roster-server binary.

use std::sync::Arc;

use anyhow::{Context, Result};

use activity_roster::api::{create_router, AppState};
use activity_roster::config::Config;
use activity_roster::roster::Roster;
use activity_roster::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_filter);

    tracing::info!(version = activity_roster::VERSION, "Starting activity roster");

    let roster = match &config.seed_file {
        Some(path) => Roster::from_seed_file(path).context("Failed to load roster seed")?,
        None => Roster::seeded(),
    };
    tracing::info!(activities = roster.activity_count(), "Roster ready");

    let state = AppState::new(Arc::new(roster)).with_static_dir(&config.static_dir);
    let app = create_router(Arc::new(state));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
