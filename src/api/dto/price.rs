//! DTOs for price endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::Price;
use crate::domain::filter::{FilterOptions, PriceRange};

/// Query string accepted by `GET /api/v1/prices`.
///
/// Every field is optional at the binding stage; missing identifiers become
/// `0` and are then rejected by validation as blank. Values that do not
/// parse (`store_id=abc`) fail binding instead.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PriceQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub store_id: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub product_id: Option<u32>,

    #[serde(flatten)]
    pub price_range: PriceRangeParams,

    #[serde(default)]
    pub sort_by: String,

    #[serde(default)]
    pub sort_order: String,
}

/// `price_range.min` / `price_range.max` query keys.
///
/// Uses `serde_with` because flattened query values arrive as strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PriceRangeParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "price_range.min")]
    pub min: Option<f64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "price_range.max")]
    pub max: Option<f64>,
}

impl From<PriceQueryParams> for FilterOptions {
    fn from(params: PriceQueryParams) -> Self {
        FilterOptions {
            store_id: params.store_id.unwrap_or_default(),
            product_id: params.product_id.unwrap_or_default(),
            price_range: PriceRange::from_bounds(params.price_range.min, params.price_range.max),
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}

/// JSON representation of a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceItem {
    pub id: u32,
    pub item: String,
    pub store: String,
    pub amount: f64,
    pub unit: String,
}

impl From<Price> for PriceItem {
    fn from(price: Price) -> Self {
        Self {
            id: price.id,
            item: price.item,
            store: price.store,
            amount: price.amount,
            unit: price.unit,
        }
    }
}

/// Envelope for `GET /api/v1/prices`.
#[derive(Debug, Serialize)]
pub struct PriceListResponse {
    pub message: String,
    pub data: Vec<PriceItem>,
}

/// Envelope carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Envelope for `GET /api/v1/prices/store/{store_id}`.
#[derive(Debug, Serialize)]
pub struct StorePricesResponse {
    pub message: String,
    pub store_id: String,
}

/// Envelope for `GET /api/v1/prices/product/{product_id}`.
#[derive(Debug, Serialize)]
pub struct ProductPricesResponse {
    pub message: String,
    pub product_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_to_filter_defaults() {
        let filter = FilterOptions::from(PriceQueryParams::default());

        assert_eq!(filter, FilterOptions::default());
        assert_eq!(filter.store_id, 0);
        assert!(filter.price_range.is_none());
    }

    #[test]
    fn test_params_to_filter_full() {
        let params = PriceQueryParams {
            store_id: Some(2),
            product_id: Some(3),
            price_range: PriceRangeParams {
                min: Some(1.0),
                max: Some(4.5),
            },
            sort_by: "item".to_string(),
            sort_order: "desc".to_string(),
        };

        let filter = FilterOptions::from(params);

        assert_eq!(filter.store_id, 2);
        assert_eq!(filter.product_id, 3);
        assert_eq!(filter.price_range, Some(PriceRange { min: 1.0, max: 4.5 }));
        assert_eq!(filter.sort_by, "item");
        assert_eq!(filter.sort_order, "desc");
    }

    #[test]
    fn test_price_item_json_shape() {
        let item = PriceItem::from(Price::new(1, "Apple", "Store A", 0.99, "kg"));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "item": "Apple",
                "store": "Store A",
                "amount": 0.99,
                "unit": "kg"
            })
        );
    }
}
