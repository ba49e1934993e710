#![allow(dead_code)]

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use grocery_price_api::api::handlers::{
    create_price_handler, create_user_handler, get_prices_handler, health_handler,
    list_users_handler, prices_by_product_handler, prices_by_store_handler,
};
use grocery_price_api::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/prices", get(get_prices_handler))
        .route("/api/v1/prices", post(create_price_handler))
        .route("/api/v1/prices/store/{store_id}", get(prices_by_store_handler))
        .route(
            "/api/v1/prices/product/{product_id}",
            get(prices_by_product_handler),
        )
        .route("/api/v1/users", get(list_users_handler))
        .route("/api/v1/users", post(create_user_handler))
        .with_state(state)
}

pub fn make_server() -> TestServer {
    TestServer::new(create_test_router(create_test_state())).unwrap()
}
