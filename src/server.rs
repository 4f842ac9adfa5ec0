//! HTTP server initialization and runtime setup.
//!
//! Wires the store, service, and router together and drives the Axum server
//! lifecycle.

use crate::application::services::ReceiptService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryReceiptRepository;
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
/// - The in-memory receipt store (lives for the process duration)
/// - The receipt service and shared state
/// - The Axum HTTP server with graceful ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs. A failed bind is fatal: the error
/// propagates out of `main`.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryReceiptRepository::new());
    let receipt_service = Arc::new(ReceiptService::new(repository));

    let state = AppState::new(receipt_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when SIGINT (ctrl-c) is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
