//! Price entity.

/// The price of an item at a particular store.
///
/// Prices are immutable once constructed; repositories hand out clones.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub id: u32,
    pub item: String,
    pub store: String,
    /// Monetary amount, never negative.
    pub amount: f64,
    pub unit: String,
}

impl Price {
    pub fn new(
        id: u32,
        item: impl Into<String>,
        store: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
    ) -> Self {
        debug_assert!(amount >= 0.0, "price amount must not be negative");

        Self {
            id,
            item: item.into(),
            store: store.into(),
            amount,
            unit: unit.into(),
        }
    }
}
