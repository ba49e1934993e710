//! In-memory price catalogue.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Price;
use crate::domain::filter::FilterOptions;
use crate::domain::repositories::PriceRepository;
use crate::error::AppError;

/// Price repository backed by a fixed list.
///
/// Stands in for a real store or scraper. [`PriceRepository::find`] returns
/// every record in catalogue order and does not apply the filter.
#[derive(Debug, Clone)]
pub struct InMemoryPriceRepository {
    prices: Vec<Price>,
}

impl InMemoryPriceRepository {
    /// Creates a repository serving the given records.
    pub fn new(prices: Vec<Price>) -> Self {
        Self { prices }
    }

    /// Creates a repository serving the built-in five-record sample.
    pub fn with_sample_data() -> Self {
        Self::new(sample_prices())
    }
}

impl Default for InMemoryPriceRepository {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

/// The fixed sample catalogue, in serving order.
pub fn sample_prices() -> Vec<Price> {
    vec![
        Price::new(1, "Apple", "Store A", 0.99, "kg"),
        Price::new(2, "Banana", "Store B", 0.59, "kg"),
        Price::new(3, "Orange", "Store A", 1.29, "kg"),
        Price::new(4, "Milk", "Store C", 1.49, "L"),
        Price::new(5, "Bread", "Store B", 2.49, "loaf"),
    ]
}

#[async_trait]
impl PriceRepository for InMemoryPriceRepository {
    async fn find(&self, filter: &FilterOptions) -> Result<Vec<Price>, AppError> {
        // TODO: apply sort_by/sort_order and price_range once a real data source defines their semantics.
        debug!(
            store_id = filter.store_id,
            product_id = filter.product_id,
            sort_by = %filter.sort_by,
            sort_order = %filter.sort_order,
            "Serving static price catalogue; filter not applied"
        );

        Ok(self.prices.clone())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.prices.len())
    }
}
