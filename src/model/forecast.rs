// src/model/forecast.rs

use std::collections::HashMap;

use crate::model::product::{ProductId, Quantity};

/// Forecasted demand per product, as loaded from the demand table.
///
/// A product may appear on many rows (one per date); lookups average them.
#[derive(Debug, Clone, Default)]
pub struct ForecastTable {
    rows: HashMap<ProductId, Vec<Quantity>>,
}

impl ForecastTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product_id: ProductId, forecasted_demand: Quantity) {
        self.rows.entry(product_id).or_default().push(forecasted_demand);
    }

    /// Mean forecast over all rows for the product, `None` when it has no rows.
    pub fn mean(&self, product_id: &ProductId) -> Option<Quantity> {
        let values = self.rows.get(product_id)?;
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<Quantity>() / values.len() as Quantity)
    }

    /// Number of rows loaded across all products.
    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }
}
