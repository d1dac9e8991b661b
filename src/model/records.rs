// src/model/records.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};
use crate::model::product::{ProductId, Quantity};

/// Inventory table row as read; unusable cells are `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryRow {
    #[serde(rename = "Product ID")]
    pub product_id: ProductId,
    #[serde(rename = "Stock Levels", default, deserialize_with = "csv::invalid_option")]
    pub stock_level: Option<u32>,
    #[serde(rename = "Reorder Point", default, deserialize_with = "csv::invalid_option")]
    pub reorder_point: Option<u32>,
    #[serde(
        rename = "Supplier Lead Time (days)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub lead_time_days: Option<u32>,
}

impl InventoryRow {
    /// The row with every value present, or the first column that is not.
    pub fn complete(&self) -> Result<InventoryRecord> {
        let require = |value: Option<u32>, column: &'static str| {
            value.ok_or_else(|| incomplete("Inventory", &self.product_id, column))
        };
        Ok(InventoryRecord {
            product_id: self.product_id.clone(),
            stock_level: require(self.stock_level, "Stock Levels")?,
            reorder_point: require(self.reorder_point, "Reorder Point")?,
            lead_time_days: require(self.lead_time_days, "Supplier Lead Time (days)")?,
        })
    }
}

/// Pricing table row as read; unusable cells are `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingRow {
    #[serde(rename = "Product ID")]
    pub product_id: ProductId,
    #[serde(rename = "Elasticity Index", default, deserialize_with = "csv::invalid_option")]
    pub elasticity: Option<f64>,
    #[serde(rename = "Competitor Prices", default, deserialize_with = "csv::invalid_option")]
    pub competitor_price: Option<f64>,
    #[serde(rename = "Price", default, deserialize_with = "csv::invalid_option")]
    pub base_price: Option<f64>,
}

impl PricingRow {
    pub fn complete(&self) -> Result<PricingRecord> {
        let require = |value: Option<f64>, column: &'static str| {
            value
                .filter(|v| !v.is_nan())
                .ok_or_else(|| incomplete("Pricing", &self.product_id, column))
        };
        Ok(PricingRecord {
            product_id: self.product_id.clone(),
            elasticity: require(self.elasticity, "Elasticity Index")?,
            competitor_price: require(self.competitor_price, "Competitor Prices")?,
            base_price: require(self.base_price, "Price")?,
        })
    }
}

fn incomplete(table: &'static str, product_id: &ProductId, column: &'static str) -> InventoryError {
    InventoryError::IncompleteRecord {
        table,
        product: product_id.clone(),
        column,
    }
}

/// Inventory values for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub product_id: ProductId,
    pub stock_level: u32,
    pub reorder_point: u32,
    pub lead_time_days: u32,
}

/// Pricing values for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRecord {
    pub product_id: ProductId,
    pub elasticity: f64,
    pub competitor_price: f64,
    pub base_price: f64,
}

impl PricingRecord {
    /// Starting price for the daily loop: base nudged by `(1 - elasticity) * 10%`.
    pub fn optimal_price(&self) -> f64 {
        crate::model::product::round2(self.base_price * (1.0 + (1.0 - self.elasticity) * 0.1))
    }
}

/// One report line per (day, product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Product ID")]
    pub product_id: ProductId,
    #[serde(rename = "Forecasted Demand")]
    pub forecasted_demand: f64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Stock Before")]
    pub stock_before: Quantity,
    #[serde(rename = "Units Fulfilled")]
    pub units_fulfilled: Quantity,
    #[serde(rename = "Stock After")]
    pub stock_after: Quantity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_price_rewards_low_elasticity() {
        let record = PricingRecord {
            product_id: ProductId::from(9502),
            elasticity: -0.5,
            competitor_price: 90.0,
            base_price: 100.0,
        };
        // 100 * (1 + 1.5 * 0.1)
        assert_eq!(record.optimal_price(), 115.0);
    }

    #[test]
    fn incomplete_row_names_first_missing_column() {
        let row = InventoryRow {
            product_id: ProductId::from(2605),
            stock_level: None,
            reorder_point: Some(20),
            lead_time_days: None,
        };

        match row.complete() {
            Err(InventoryError::IncompleteRecord { table, column, .. }) => {
                assert_eq!(table, "Inventory");
                assert_eq!(column, "Stock Levels");
            }
            other => panic!("expected incomplete record, got {other:?}"),
        }
    }

    #[test]
    fn nan_price_is_unusable() {
        let row = PricingRow {
            product_id: ProductId::from(9502),
            elasticity: Some(-0.5),
            competitor_price: Some(10.0),
            base_price: Some(f64::NAN),
        };
        assert!(row.complete().is_err());
    }
}
