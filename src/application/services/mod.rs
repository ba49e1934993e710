//! Business logic services for the application layer.

pub mod price_service;
pub mod user_service;

pub use price_service::PriceService;
pub use user_service::UserService;
