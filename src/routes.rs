//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /receipts/process`      - Submit a receipt, returns its identifier
//! - `GET  /receipts/{id}/points`  - Points for a stored receipt
//!
//! Unregistered methods on these routes receive 405; there are no other
//! endpoints.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{points_handler, process_receipt_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(points_handler))
        .layer(rate_limit::layer())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
