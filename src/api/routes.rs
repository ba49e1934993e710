//! API route configuration.

use crate::api::handlers::{
    create_price_handler, create_user_handler, get_prices_handler, list_users_handler,
    prices_by_product_handler, prices_by_store_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Version 1 API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET  /prices`                      - Validated price query
/// - `POST /prices`                      - Price creation placeholder
/// - `GET  /prices/store/{store_id}`     - Prices for a store
/// - `GET  /prices/product/{product_id}` - Prices for a product
/// - `GET  /users`                       - List users
/// - `POST /users`                       - Create a user
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/prices", get(get_prices_handler).post(create_price_handler))
        .route("/prices/store/{store_id}", get(prices_by_store_handler))
        .route("/prices/product/{product_id}", get(prices_by_product_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
}
