//! Domain layer containing business entities and rules.
//!
//! This module defines the core data model and repository contracts,
//! independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Price and user records
//! - [`filter`] - Price query descriptor and its validation rules
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Services orchestrating repositories live in [`crate::application::services`]

pub mod entities;
pub mod filter;
pub mod repositories;
