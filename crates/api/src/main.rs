//! Shiftboard - measurement dashboard backend
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use shiftboard_app::utils::logging::init_tracing;
use shiftboard_app::{router, AppContext};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    init_tracing();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!("Could not load .env file: {}", e),
    }

    let config = shiftboard_infra::config::load().context("Failed to load configuration")?;
    let bind_address = config.server.bind_address.clone();

    let context = Arc::new(
        AppContext::new(config).await.context("Failed to initialize application context")?,
    );
    let app = router(context);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!(address = %bind_address, "Shiftboard listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Shiftboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
