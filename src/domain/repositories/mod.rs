//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the data sources behind prices and users so a real
//! backing store can replace the in-memory ones without touching handlers or
//! validation.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`PriceRepository`] - Price lookup
//! - [`UserRepository`] - User listing and creation

pub mod price_repository;
pub mod user_repository;

pub use price_repository::PriceRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use price_repository::MockPriceRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
