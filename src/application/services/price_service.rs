//! Price lookup service.

use crate::domain::entities::Price;
use crate::domain::filter::FilterOptions;
use crate::domain::repositories::PriceRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service answering price queries.
///
/// Expects filters that have already passed [`validator::Validate`]; handlers
/// are responsible for that check.
pub struct PriceService<R: PriceRepository> {
    repository: Arc<R>,
}

impl<R: PriceRepository> PriceService<R> {
    /// Creates a new price service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Loads prices matching `filter`.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn load_price_data(&self, filter: &FilterOptions) -> Result<Vec<Price>, AppError> {
        let prices = self.repository.find(filter).await?;

        tracing::debug!(count = prices.len(), "Loaded price data");

        Ok(prices)
    }

    /// Number of records in the catalogue.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn catalogue_size(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPriceRepository;
    use serde_json::json;

    fn filter(store_id: u32, product_id: u32) -> FilterOptions {
        FilterOptions {
            store_id,
            product_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_price_data_passes_filter_through() {
        let mut mock_repo = MockPriceRepository::new();

        mock_repo
            .expect_find()
            .withf(|f| f.store_id == 4 && f.product_id == 2)
            .times(1)
            .returning(|_| Ok(vec![Price::new(1, "Apple", "Store A", 0.99, "kg")]));

        let service = PriceService::new(Arc::new(mock_repo));

        let prices = service.load_price_data(&filter(4, 2)).await.unwrap();

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].item, "Apple");
    }

    #[tokio::test]
    async fn test_load_price_data_propagates_errors() {
        let mut mock_repo = MockPriceRepository::new();

        mock_repo
            .expect_find()
            .times(1)
            .returning(|_| Err(AppError::internal("Store unavailable", json!({}))));

        let service = PriceService::new(Arc::new(mock_repo));

        let result = service.load_price_data(&filter(1, 1)).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_catalogue_size() {
        let mut mock_repo = MockPriceRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(5));

        let service = PriceService::new(Arc::new(mock_repo));

        assert_eq!(service.catalogue_size().await.unwrap(), 5);
    }
}
