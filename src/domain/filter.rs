//! Price query descriptor and its validation rules.
//!
//! [`FilterOptions`] is built per request from query parameters, checked with
//! [`Validate::validate`], handed to the price repository and then dropped.
//!
//! # Rules
//!
//! | Field         | Rule                                               |
//! |---------------|----------------------------------------------------|
//! | `store_id`    | required, `>= 1` (`0` reads as "cannot be blank")  |
//! | `product_id`  | required, `>= 1`                                   |
//! | `price_range` | optional; bounds `>= 0`; `max >= min` if both `> 0`|
//! | `sort_by`     | `amount`, `store`, `item` or empty                 |
//! | `sort_order`  | `asc`, `desc` or empty                             |
//!
//! All violations are collected in one [`validator::ValidationErrors`] keyed by
//! field name.

use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Accepted values for [`FilterOptions::sort_by`].
pub const SORT_FIELDS: [&str; 4] = ["amount", "store", "item", ""];

/// Accepted values for [`FilterOptions::sort_order`].
pub const SORT_ORDERS: [&str; 3] = ["asc", "desc", ""];

/// Options for filtering and sorting prices.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct FilterOptions {
    #[validate(range(min = 1, message = "cannot be blank"))]
    pub store_id: u32,

    #[validate(range(min = 1, message = "cannot be blank"))]
    pub product_id: u32,

    #[validate(nested)]
    pub price_range: Option<PriceRange>,

    #[validate(custom(function = "validate_sort_by"))]
    pub sort_by: String,

    #[validate(custom(function = "validate_sort_order"))]
    pub sort_order: String,
}

/// Inclusive amount bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Validate)]
#[validate(schema(function = "validate_price_bounds"))]
pub struct PriceRange {
    #[validate(range(min = 0.0, message = "must be no less than 0"))]
    pub min: f64,

    #[validate(range(min = 0.0, message = "must be no less than 0"))]
    pub max: f64,
}

impl PriceRange {
    /// Builds a range from optional query bounds.
    ///
    /// Returns `None` when neither bound was supplied; a single missing bound
    /// defaults to `0`, which disables the cross-field check.
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }

        Some(Self {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(0.0),
        })
    }
}

fn validate_sort_by(value: &str) -> Result<(), ValidationError> {
    one_of(value, &SORT_FIELDS)
}

fn validate_sort_order(value: &str) -> Result<(), ValidationError> {
    one_of(value, &SORT_ORDERS)
}

fn one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }

    let mut error =
        ValidationError::new("one_of").with_message(Cow::Borrowed("must be a valid value"));
    error.add_param(Cow::Borrowed("value"), &value);
    Err(error)
}

fn validate_price_bounds(range: &PriceRange) -> Result<(), ValidationError> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ValidationError::new("finite")
            .with_message(Cow::Borrowed("bounds must be finite numbers")));
    }

    if range.min > 0.0 && range.max > 0.0 && range.max < range.min {
        let mut error = ValidationError::new("max_below_min")
            .with_message(Cow::Borrowed("max must be no less than min"));
        error.add_param(Cow::Borrowed("min"), &range.min);
        error.add_param(Cow::Borrowed("max"), &range.max);
        return Err(error);
    }

    Ok(())
}
