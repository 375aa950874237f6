//! Server initialization and main run loop

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::load_config;

/// Build the full application router: API routes plus CORS and request
/// tracing layers.
pub fn build_router(cors: tower_http::cors::CorsLayer) -> Router {
    crate::api::api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the server until a shutdown signal arrives
pub async fn run(host_override: Option<String>, port_override: Option<u16>) -> Result<()> {
    info!(
        "Starting FluxFlow ML Engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = load_config().context("Failed to load configuration")?;

    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

    let app = build_router(config.cors.layer());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("API docs available at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
