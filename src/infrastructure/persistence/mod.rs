//! In-memory repository implementations.
//!
//! Both repositories are explicitly owned objects injected into services at
//! construction; nothing here is a global.
//!
//! # Repositories
//!
//! - [`InMemoryPriceRepository`] - Fixed price catalogue
//! - [`InMemoryUserRepository`] - Append-only user list behind a lock

pub mod memory_price_repository;
pub mod memory_user_repository;

pub use memory_price_repository::InMemoryPriceRepository;
pub use memory_user_repository::InMemoryUserRepository;
