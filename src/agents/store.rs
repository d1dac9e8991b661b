// src/agents/store.rs

use log::{info, warn};

use crate::agents::traits::{Fulfillment, OrderOutcome, Replenishment};
use crate::model::product::{ProductId, Quantity};
use crate::model::records::InventoryRecord;

/// A store that keeps one product on its shelves.
#[derive(Debug, Clone)]
pub struct StoreAgent {
    // Identity
    pub product_id: ProductId,

    // State Variables
    pub current_stock: Quantity,
    pub reorder_point: Quantity,
    /// Tracked for reporting only; deliveries arrive immediately.
    pub lead_time_days: u32,
}

impl StoreAgent {
    pub fn new(
        product_id: ProductId,
        current_stock: Quantity,
        lead_time_days: u32,
        reorder_point: Quantity,
    ) -> Self {
        Self {
            product_id,
            current_stock,
            reorder_point,
            lead_time_days,
        }
    }

    pub fn from_record(record: &InventoryRecord) -> Self {
        Self::new(
            record.product_id.clone(),
            record.stock_level as Quantity,
            record.lead_time_days,
            record.reorder_point as Quantity,
        )
    }

    /// Units to request for a given forecast.
    ///
    /// Formula: Order = Forecast - CurrentStock + ReorderPoint (never below 0)
    pub fn reorder_quantity(&self, forecasted_demand: Quantity) -> Quantity {
        (forecasted_demand - self.current_stock + self.reorder_point).max(0.0)
    }
}

impl Replenishment for StoreAgent {
    fn evaluate_and_order(
        &mut self,
        forecasted_demand: Quantity,
        supplier: &mut dyn Fulfillment,
    ) -> OrderOutcome {
        info!("Evaluating stock for Product ID {}", self.product_id);

        if forecasted_demand <= self.current_stock {
            info!("Stock sufficient. No reorder needed.");
            return OrderOutcome::NotNeeded;
        }

        let requested = self.reorder_quantity(forecasted_demand);
        info!("Requesting reorder of {requested} units from warehouse");
        let received = supplier.fulfill_order(&self.product_id, requested);

        if received > 0.0 {
            self.current_stock += received;
            info!("Received {received} units from warehouse.");
            OrderOutcome::Received {
                requested,
                received,
            }
        } else {
            warn!(
                "Warehouse out of stock for Product ID {}. Requested: {requested}",
                self.product_id
            );
            OrderOutcome::Shortage { requested }
        }
    }
}
