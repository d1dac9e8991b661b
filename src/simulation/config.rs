// src/simulation/config.rs

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::model::product::{ProductId, Quantity};

/// Knobs of the daily report loop.
#[derive(Debug, Clone)]
pub struct LoopPolicy {
    /// Display-only reorder point: forecast times this factor.
    pub reorder_point_factor: f64,
    /// Units ordered from the warehouse: forecast times this factor.
    pub order_factor: f64,
    /// Price change applied when yesterday's fulfillment missed or beat the forecast.
    pub momentum_step: f64,
    /// Lowest starting price of a day.
    pub price_floor: f64,
}

impl Default for LoopPolicy {
    fn default() -> Self {
        Self {
            reorder_point_factor: 1.2,
            order_factor: 1.3,
            momentum_step: 0.05,
            price_floor: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // Inputs
    pub demand_path: PathBuf,
    pub inventory_path: PathBuf,
    pub pricing_path: PathBuf,

    // Outputs
    pub output_dir: PathBuf,
    pub visualization_dir: String,
    pub report_name: String,
    pub page_name: String,

    // Sample products from each table
    pub demand_product: ProductId,
    pub inventory_product: ProductId,
    pub pricing_product: ProductId,

    pub simulation_days: usize,
    pub product_sample: usize,
    pub warehouse_initial_stock: Quantity,
    /// First simulated day; today when unset.
    pub start_date: Option<NaiveDate>,
    /// Seed for the agent-communication trace; entropy when unset.
    pub seed: Option<u64>,

    pub policy: LoopPolicy,
}

impl SimulationConfig {
    pub fn visualization_path(&self) -> PathBuf {
        self.output_dir.join(&self.visualization_dir)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_name)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            demand_path: PathBuf::from("demand_forecasting.csv"),
            inventory_path: PathBuf::from("inventory_monitoring.csv"),
            pricing_path: PathBuf::from("pricing_optimization.csv"),
            output_dir: PathBuf::from("docs"),
            visualization_dir: "visualizations".to_string(),
            report_name: "simulation_report.csv".to_string(),
            page_name: "index.html".to_string(),
            demand_product: ProductId::from(1001),
            inventory_product: ProductId::from(9286),
            pricing_product: ProductId::from(9502),
            simulation_days: 7,
            product_sample: 3,
            warehouse_initial_stock: 500.0,
            start_date: None,
            seed: None,
            policy: LoopPolicy::default(),
        }
    }
}
