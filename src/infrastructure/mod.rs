//! Infrastructure layer for data sources.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations
pub mod persistence;
