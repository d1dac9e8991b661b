// src/agents/warehouse.rs

use log::{info, warn};
use std::collections::HashMap;

use crate::agents::traits::Fulfillment;
use crate::model::product::{ProductId, Quantity};

/// Central stock pool that serves store reorders.
#[derive(Debug, Clone, Default)]
pub struct WarehouseAgent {
    stock: HashMap<ProductId, Quantity>,
}

impl WarehouseAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stock for a product. The quantity is taken as given.
    pub fn set_stock(&mut self, product_id: ProductId, quantity: Quantity) {
        self.stock.insert(product_id, quantity);
    }

    /// Removes as much of `quantity` as is on hand and returns the removed amount.
    ///
    /// Used by the daily loop, which accepts partial shipments.
    pub fn withdraw_up_to(&mut self, product_id: &ProductId, quantity: Quantity) -> Quantity {
        let available = self.get_stock(product_id).max(0.0);
        let taken = quantity.min(available).max(0.0);
        if let Some(level) = self.stock.get_mut(product_id) {
            *level -= taken;
        }
        taken
    }
}

impl Fulfillment for WarehouseAgent {
    fn get_stock(&self, product_id: &ProductId) -> Quantity {
        self.stock.get(product_id).copied().unwrap_or(0.0)
    }

    fn fulfill_order(&mut self, product_id: &ProductId, quantity: Quantity) -> Quantity {
        let available = self.get_stock(product_id);

        if available >= quantity {
            if let Some(level) = self.stock.get_mut(product_id) {
                *level -= quantity;
            }
            info!("[WarehouseAgent] Fulfilled order of {quantity} units for Product ID {product_id}");
            quantity
        } else {
            warn!("[WarehouseAgent] Insufficient stock for Product ID {product_id}. Available: {available}");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid() -> ProductId {
        ProductId::from(9286)
    }

    #[test]
    fn unknown_product_has_no_stock() {
        let warehouse = WarehouseAgent::new();
        assert_eq!(warehouse.get_stock(&pid()), 0.0);
    }

    #[test]
    fn full_order_is_shipped_and_deducted() {
        let mut warehouse = WarehouseAgent::new();
        warehouse.set_stock(pid(), 500.0);

        assert_eq!(warehouse.fulfill_order(&pid(), 70.0), 70.0);
        assert_eq!(warehouse.get_stock(&pid()), 430.0);
    }

    #[test]
    fn order_above_stock_ships_nothing() {
        let mut warehouse = WarehouseAgent::new();
        warehouse.set_stock(pid(), 40.0);

        assert_eq!(warehouse.fulfill_order(&pid(), 41.0), 0.0);
        assert_eq!(warehouse.get_stock(&pid()), 40.0);
    }

    #[test]
    fn exact_stock_can_be_drained_but_not_overdrawn() {
        let mut warehouse = WarehouseAgent::new();
        warehouse.set_stock(pid(), 25.0);

        for requested in [10.0, 15.0, 1.0, 0.5] {
            let shipped = warehouse.fulfill_order(&pid(), requested);
            assert!(shipped == requested || shipped == 0.0);
            assert!(warehouse.get_stock(&pid()) >= 0.0);
        }
        assert_eq!(warehouse.get_stock(&pid()), 0.0);
    }

    #[test]
    fn order_for_unknown_product_ships_nothing() {
        let mut warehouse = WarehouseAgent::new();
        assert_eq!(warehouse.fulfill_order(&pid(), 5.0), 0.0);
        assert_eq!(warehouse.get_stock(&pid()), 0.0);
    }

    #[test]
    fn withdraw_caps_at_available() {
        let mut warehouse = WarehouseAgent::new();
        warehouse.set_stock(pid(), 12.0);

        assert_eq!(warehouse.withdraw_up_to(&pid(), 20.0), 12.0);
        assert_eq!(warehouse.get_stock(&pid()), 0.0);
        assert_eq!(warehouse.withdraw_up_to(&pid(), 5.0), 0.0);
    }

    #[test]
    fn withdraw_never_goes_below_zero_on_negative_stock() {
        let mut warehouse = WarehouseAgent::new();
        warehouse.set_stock(pid(), -3.0);

        assert_eq!(warehouse.withdraw_up_to(&pid(), 5.0), 0.0);
        assert_eq!(warehouse.get_stock(&pid()), -3.0);
    }
}
