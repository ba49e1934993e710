//! Repository trait for price data.

use crate::domain::entities::Price;
use crate::domain::filter::FilterOptions;
use crate::error::AppError;
use async_trait::async_trait;

/// Source of price records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryPriceRepository`] - fixed catalogue
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceRepository: Send + Sync {
    /// Returns prices for an already validated filter.
    ///
    /// Implementations decide how much of `filter` they honour; the in-memory
    /// catalogue ignores it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store fails.
    async fn find(&self, filter: &FilterOptions) -> Result<Vec<Price>, AppError>;

    /// Counts the records available to [`PriceRepository::find`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store fails.
    async fn count(&self) -> Result<usize, AppError>;
}
