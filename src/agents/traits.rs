// src/agents/traits.rs

use std::fmt::Debug;

use crate::model::product::{ProductId, Quantity};

/// Supplier side of a replenishment exchange.
pub trait Fulfillment: Debug {
    /// Available quantity for a product; 0 when the product is unknown.
    fn get_stock(&self, product_id: &ProductId) -> Quantity;

    /// Ships the full `quantity` or nothing.
    ///
    /// Returns the shipped amount: either `quantity` or 0, never a partial fill.
    fn fulfill_order(&mut self, product_id: &ProductId, quantity: Quantity) -> Quantity;
}

/// What a replenishment check ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderOutcome {
    /// Stock already covers the forecast.
    NotNeeded,
    /// The supplier shipped the requested amount.
    Received { requested: Quantity, received: Quantity },
    /// The supplier could not ship; stock is unchanged.
    Shortage { requested: Quantity },
}

impl OrderOutcome {
    pub fn requested(&self) -> Quantity {
        match self {
            OrderOutcome::NotNeeded => 0.0,
            OrderOutcome::Received { requested, .. } | OrderOutcome::Shortage { requested } => {
                *requested
            }
        }
    }
}

/// Demand side of a replenishment exchange.
pub trait Replenishment: Debug {
    /// Compares the forecast with current stock and, if needed, orders from `supplier`.
    fn evaluate_and_order(
        &mut self,
        forecasted_demand: Quantity,
        supplier: &mut dyn Fulfillment,
    ) -> OrderOutcome;
}
