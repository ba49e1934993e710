//! Application layer services.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers call.
//!
//! # Available Services
//!
//! - [`services::price_service::PriceService`] - Price lookup
//! - [`services::user_service::UserService`] - User listing and creation

pub mod services;
