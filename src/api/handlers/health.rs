//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more repositories failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "prices": { "status": "ok", "message": "Catalogue records: 5" },
///     "users": { "status": "ok", "message": "Stored users: 0" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let prices = match state.price_service.catalogue_size().await {
        Ok(count) => CheckStatus::ok(format!("Catalogue records: {count}")),
        Err(e) => CheckStatus::error(format!("Price repository error: {e}")),
    };

    let users = match state.user_service.user_count().await {
        Ok(count) => CheckStatus::ok(format!("Stored users: {count}")),
        Err(e) => CheckStatus::error(format!("User repository error: {e}")),
    };

    let all_healthy = prices.is_ok() && users.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { prices, users },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
