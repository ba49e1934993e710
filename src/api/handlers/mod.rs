//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod prices;
pub mod users;

pub use health::health_handler;
pub use prices::{
    create_price_handler, get_prices_handler, prices_by_product_handler, prices_by_store_handler,
};
pub use users::{create_user_handler, list_users_handler};
