//! HTTP server initialization and runtime setup.
//!
//! Builds the repositories and services, then runs the Axum server until
//! Ctrl-C is received.

use crate::config::Config;
use crate::infrastructure::persistence::{InMemoryPriceRepository, InMemoryUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory price catalogue and user store
/// - Price and user services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let price_repository = Arc::new(InMemoryPriceRepository::with_sample_data());
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(price_repository, user_repository);
    tracing::info!("In-memory repositories initialized");

    let app = app_router(state, config.rate_limit());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
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
