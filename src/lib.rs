//! # Grocery Price API
//!
//! A small REST API exposing grocery prices and users, built with Axum.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - Entities, price filter rules and repository traits
//! - **Application Layer** ([`application`]) - Services over the repository traits
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! Prices come from a fixed sample catalogue and users live in memory for
//! the lifetime of the process. Both sit behind [`domain::repositories`]
//! traits so a real store can replace them.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! cargo run
//!
//! curl 'http://127.0.0.1:3000/api/v1/prices/?store_id=1&product_id=1'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PriceService, UserService};
    pub use crate::domain::entities::{NewUser, Price, User};
    pub use crate::domain::filter::{FilterOptions, PriceRange};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
