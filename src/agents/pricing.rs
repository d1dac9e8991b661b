// src/agents/pricing.rs

use log::{info, warn};

use crate::model::product::{round2, Quantity};
use crate::model::records::PricingRecord;

/// Lowest price the agent will ever quote.
pub const MIN_PRICE: f64 = 0.01;

/// Nudges a product's price from its demand-to-stock ratio.
#[derive(Debug, Clone)]
pub struct PricingAgent {
    pub base_price: f64,
    /// Usually negative: demand falls as price rises.
    pub elasticity: f64,
}

impl PricingAgent {
    pub fn new(base_price: f64, elasticity: f64) -> Self {
        Self {
            base_price,
            elasticity,
        }
    }

    pub fn from_record(record: &PricingRecord) -> Self {
        Self::new(record.base_price, record.elasticity)
    }

    /// Suggested price for the given forecast and stock.
    ///
    /// Formula: Price = max(Base * (1 + Elasticity * (1 - Demand / Stock)), 0.01)
    ///
    /// With zero stock the ratio is undefined and the base price is returned as-is.
    pub fn adjust_price(&self, forecasted_demand: Quantity, current_stock: Quantity) -> f64 {
        if current_stock == 0.0 {
            warn!("Stock is zero. Price remains unchanged.");
            return self.base_price;
        }

        let ratio = forecasted_demand / current_stock;
        let multiplier = 1.0 + self.elasticity * (1.0 - ratio);
        let new_price = round2((self.base_price * multiplier).max(MIN_PRICE));

        info!(
            "Adjusted price from ${:.2} to ${:.2} (Forecasted demand: {}, Stock: {})",
            self.base_price, new_price, forecasted_demand, current_stock
        );
        new_price
    }
}
