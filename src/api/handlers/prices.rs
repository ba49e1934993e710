//! Handlers for price endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::price::{
    MessageResponse, PriceItem, PriceListResponse, PriceQueryParams, ProductPricesResponse,
    StorePricesResponse,
};
use crate::domain::filter::FilterOptions;
use crate::error::AppError;
use crate::state::AppState;

/// Returns prices for a validated filter.
///
/// # Endpoint
///
/// `GET /api/v1/prices`
///
/// # Query Parameters
///
/// - `store_id` (required, `>= 1`)
/// - `product_id` (required, `>= 1`)
/// - `price_range.min`, `price_range.max` (optional, `>= 0`, `max >= min`)
/// - `sort_by` - `amount`, `store` or `item`
/// - `sort_order` - `asc` or `desc`
///
/// # Response
///
/// ```json
/// {
///   "message": "Get all prices",
///   "data": [
///     { "id": 1, "item": "Apple", "store": "Store A", "amount": 0.99, "unit": "kg" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the query does not bind or fails validation.
/// Validation details are keyed by field name.
pub async fn get_prices_handler(
    State(state): State<AppState>,
    query: Result<Query<PriceQueryParams>, QueryRejection>,
) -> Result<Json<PriceListResponse>, AppError> {
    let Query(params) = query?;

    let filter = FilterOptions::from(params);
    filter.validate()?;

    let prices = state.price_service.load_price_data(&filter).await?;

    Ok(Json(PriceListResponse {
        message: "Get all prices".to_string(),
        data: prices.into_iter().map(PriceItem::from).collect(),
    }))
}

/// Placeholder for price creation.
///
/// # Endpoint
///
/// `POST /api/v1/prices`
pub async fn create_price_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Create new price".to_string(),
    })
}

/// Echoes the requested store.
///
/// # Endpoint
///
/// `GET /api/v1/prices/store/{store_id}`
pub async fn prices_by_store_handler(Path(store_id): Path<String>) -> Json<StorePricesResponse> {
    Json(StorePricesResponse {
        message: "Get prices by store".to_string(),
        store_id,
    })
}

/// Echoes the requested product.
///
/// # Endpoint
///
/// `GET /api/v1/prices/product/{product_id}`
pub async fn prices_by_product_handler(
    Path(product_id): Path<String>,
) -> Json<ProductPricesResponse> {
    Json(ProductPricesResponse {
        message: "Get prices by product".to_string(),
        product_id,
    })
}
