//! REST API layer for HTTP request/response handling.
//!
//! This layer binds HTTP input into domain types, runs validation, calls the
//! services and shapes JSON responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and rate limiting layers
//! - [`routes`] - Route configuration under `/api/v1`

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
