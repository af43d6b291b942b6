//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream gateway and services, then runs the Axum server
//! until Ctrl-C.

use crate::config::Config;
use crate::domain::gateways::VideoGateway;
use crate::infrastructure::http::DouyinGateway;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Pooled upstream HTTP client
/// - Resolve and download services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let gateway: Arc<dyn VideoGateway> = Arc::new(
        DouyinGateway::new(&config.http_client_config())
            .context("Failed to build upstream HTTP client")?,
    );

    let state = AppState::new(
        gateway,
        config.short_link_hosts.clone(),
        config.download_dir.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
