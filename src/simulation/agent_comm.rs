// src/simulation/agent_comm.rs

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::agents::planner::PlannerAgent;
use crate::agents::store::StoreAgent;
use crate::agents::traits::{Fulfillment, Replenishment};
use crate::agents::warehouse::WarehouseAgent;
use crate::error::Result;
use crate::io::charts;
use crate::model::product::{ProductId, Quantity};

const STORE_STOCK_RANGE: std::ops::RangeInclusive<u32> = 30..=120;
const STORE_LEAD_TIME_DAYS: u32 = 5;
const STORE_REORDER_POINT: Quantity = 100.0;
const WAREHOUSE_STOCK: Quantity = 500.0;

/// What one simulated store/warehouse exchange looked like.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub day: usize,
    pub forecasted_demand: Quantity,
    pub store_stock: Quantity,
    pub reorder_qty: Quantity,
}

/// Replays independent store/warehouse exchanges and keeps their history.
///
/// Every day starts from a fresh store with a random shelf level and a fresh
/// warehouse, so days do not influence each other. The history lives here
/// for one run and is dropped with the simulation.
pub struct AgentCommSimulation {
    rng: StdRng,
    pub history: BTreeMap<ProductId, Vec<DayRecord>>,
}

impl AgentCommSimulation {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            history: BTreeMap::new(),
        }
    }

    pub fn simulate_day(&mut self, product_id: &ProductId, forecasted_demand: Quantity, day: usize) -> &DayRecord {
        let initial_stock = self.rng.gen_range(STORE_STOCK_RANGE) as Quantity;
        let mut store = StoreAgent::new(
            product_id.clone(),
            initial_stock,
            STORE_LEAD_TIME_DAYS,
            STORE_REORDER_POINT,
        );
        let mut warehouse = WarehouseAgent::new();
        warehouse.set_stock(product_id.clone(), WAREHOUSE_STOCK);

        info!("Simulating day {day} for Product {product_id}");
        store.evaluate_and_order(forecasted_demand, &mut warehouse);
        info!(
            "Warehouse final stock for Product {product_id}: {}",
            warehouse.get_stock(product_id)
        );

        let days = self.history.entry(product_id.clone()).or_default();
        days.push(DayRecord {
            day,
            forecasted_demand,
            store_stock: store.current_stock,
            reorder_qty: (forecasted_demand - store.current_stock).max(0.0),
        });
        &days[days.len() - 1]
    }

    /// Runs days `1..=days` for every product, using the planner's forecast.
    pub fn simulate_days(&mut self, planner: &PlannerAgent, product_ids: &[ProductId], days: usize) {
        for day in 1..=days {
            info!("========== Day {day} ==========");
            for product_id in product_ids {
                let forecast = planner.get_demand_forecast(product_id);
                self.simulate_day(product_id, forecast, day);
            }
        }
    }

    /// One behaviour chart per product, written into `dir`.
    pub fn plot_behavior(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.history
            .iter()
            .map(|(product_id, days)| charts::render_behavior_chart(dir, product_id, days))
            .collect()
    }
}
