//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check (not rate limited)
//! - `/api/v1/*`    - REST API
//! - anything else  - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api/v1`, optional
//! - **Path normalization** - Trailing slash handling, so `/api/v1/prices/`
//!   and `/api/v1/prices` resolve to the same route

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `limit` - token bucket applied to `/api/v1`; `None` disables it
pub fn app_router(state: AppState, limit: Option<RateLimit>) -> NormalizePath<Router> {
    let api_router = match limit {
        Some(limit) => api::routes::v1_routes().layer(rate_limit::layer(limit)),
        None => api::routes::v1_routes(),
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
