//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Price`] - A price observation for an item at a store
//! - [`User`] - A registered API user
//!
//! Creation input uses a separate struct ([`NewUser`]) so identifiers are only
//! ever assigned by a repository.

pub mod price;
pub mod user;

pub use price::Price;
pub use user::{NewUser, User};
