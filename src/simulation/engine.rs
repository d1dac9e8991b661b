// src/simulation/engine.rs

use chrono::{Days, Local, NaiveDate};
use log::{debug, info, warn};
use std::path::PathBuf;

use crate::agents::planner::PlannerAgent;
use crate::agents::pricing::PricingAgent;
use crate::agents::store::StoreAgent;
use crate::agents::traits::{Fulfillment, OrderOutcome, Replenishment};
use crate::agents::warehouse::WarehouseAgent;
use crate::error::{InventoryError, Result};
use crate::io::charts::{self, ProductBars};
use crate::io::{demand, page, reporting, tables};
use crate::model::product::{round2, ProductId, Quantity};
use crate::model::records::SimulationRow;
use crate::simulation::agent_comm::AgentCommSimulation;
use crate::simulation::config::SimulationConfig;
use crate::simulation::metrics::RunSummary;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub rows: Vec<SimulationRow>,
    pub day_charts: Vec<PathBuf>,
    pub behavior_charts: Vec<PathBuf>,
    pub report_path: PathBuf,
    pub page_path: PathBuf,
    pub opening_order: OrderOutcome,
    pub summary: RunSummary,
}

/// State of one simulation run.
///
/// Created per run and consumed by [`InventorySimulation::run`]; nothing
/// survives between runs.
pub struct InventorySimulation {
    config: SimulationConfig,

    // The Actors
    pub warehouse: WarehouseAgent,

    // Outputs
    pub rows: Vec<SimulationRow>,
    pub day_charts: Vec<PathBuf>,
}

impl InventorySimulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            warehouse: WarehouseAgent::new(),
            rows: Vec::new(),
            day_charts: Vec::new(),
        }
    }

    /// Runs the whole pipeline. Any missing input aborts the run.
    pub fn run(mut self) -> Result<RunOutcome> {
        let config = self.config.clone();

        // =================================================================
        // PHASE 1: LOAD
        // =================================================================
        if demand::ensure_forecast_column(&config.demand_path)? {
            info!("Generated forecast column in {}", config.demand_path.display());
        }
        let planner = PlannerAgent::new(&config.demand_path);
        if planner.data.is_none() {
            return Err(InventoryError::ForecastDataUnavailable {
                path: planner.forecast_file.clone(),
            });
        }

        let forecast = planner.get_demand_forecast(&config.demand_product);
        if forecast.is_nan() || forecast <= 0.0 {
            return Err(InventoryError::ForecastUnavailable {
                product: config.demand_product.clone(),
                value: forecast,
            });
        }

        let inventory = tables::load_inventory(&config.inventory_path)?;
        let pricing = tables::load_pricing(&config.pricing_path)?;

        // =================================================================
        // PHASE 2: SINGLE-PRODUCT AGENT ROUND
        // =================================================================
        let inventory_row = tables::find_inventory(&inventory, &config.inventory_product)?;
        let mut store = StoreAgent::from_record(&inventory_row);
        self.warehouse
            .set_stock(config.inventory_product.clone(), config.warehouse_initial_stock);
        let opening_order = store.evaluate_and_order(forecast, &mut self.warehouse);
        info!(
            "Store {}: requested {:.2}, now holds {:.2} (lead time {} days)",
            store.product_id,
            opening_order.requested(),
            store.current_stock,
            store.lead_time_days
        );

        let price_row = tables::find_pricing(&pricing, &config.pricing_product)?;
        let optimal_price = price_row.optimal_price();
        let suggested = PricingAgent::from_record(&price_row).adjust_price(forecast, store.current_stock);
        info!(
            "Product {}: optimal price ${:.2}, pricing agent suggests ${:.2}, competitor at ${:.2}",
            price_row.product_id, optimal_price, suggested, price_row.competitor_price
        );

        // =================================================================
        // PHASE 3: DAILY LOOP
        // =================================================================
        let product_ids = tables::unique_product_ids(&inventory, config.product_sample);
        let start = config.start_date.unwrap_or_else(|| Local::now().date_naive());
        for day in 0..config.simulation_days {
            self.step(&planner, &product_ids, day, start, optimal_price)?;
        }

        // =================================================================
        // PHASE 4: REPORT & PAGE
        // =================================================================
        let report_path = config.report_path();
        reporting::write_report(&report_path, &self.rows)?;

        let mut trace = AgentCommSimulation::new(config.seed);
        trace.simulate_days(&planner, &product_ids, config.simulation_days);
        let behavior_charts = trace.plot_behavior(&config.visualization_path())?;

        let page_path = page::write_index_page(
            &config.output_dir,
            &config.page_name,
            &self.day_charts,
            &behavior_charts,
            &config.report_name,
        )?;

        let summary = RunSummary::from_rows(&self.rows, price_row.base_price);
        Ok(RunOutcome {
            rows: self.rows,
            day_charts: self.day_charts,
            behavior_charts,
            report_path,
            page_path,
            opening_order,
            summary,
        })
    }

    /// Simulates one day for every product and draws its chart.
    fn step(
        &mut self,
        planner: &PlannerAgent,
        product_ids: &[ProductId],
        day: usize,
        start: NaiveDate,
        optimal_price: f64,
    ) -> Result<()> {
        let policy = &self.config.policy;
        let date = start + Days::new(day as u64);
        let mut bars = Vec::with_capacity(product_ids.len());

        for (i, product_id) in product_ids.iter().enumerate() {
            let forecast = planner.get_demand_forecast(product_id);
            let stock_before = self.warehouse.get_stock(product_id);
            let reorder_point = forecast * policy.reorder_point_factor;
            let lead_time = 5 + day % 3;
            debug!("Product {product_id}: reorder point {reorder_point:.2}, lead time {lead_time} days");

            // Yesterday's row for the same product
            let previous = day
                .checked_sub(1)
                .and_then(|d| self.rows.get(d * product_ids.len() + i));
            let price = momentum_price(
                round2(optimal_price).max(policy.price_floor),
                previous.map(|r| r.units_fulfilled),
                forecast,
                policy.momentum_step,
            );

            let ordered: Quantity = forecast * policy.order_factor;
            let fulfilled = self.warehouse.withdraw_up_to(product_id, ordered);
            if fulfilled < ordered {
                warn!("Product {product_id}: ordered {ordered:.2}, warehouse shipped {fulfilled:.2}");
            }

            self.rows.push(SimulationRow {
                date,
                product_id: product_id.clone(),
                forecasted_demand: round2(forecast),
                price: round2(price),
                stock_before,
                units_fulfilled: round2(fulfilled),
                stock_after: round2(stock_before - fulfilled),
            });
            bars.push(ProductBars {
                product_id: product_id.clone(),
                forecast,
                fulfilled,
            });
        }

        let chart = charts::render_day_chart(&self.config.visualization_path(), day + 1, &bars)?;
        self.day_charts.push(chart);
        Ok(())
    }
}

/// Raises the price after a day that shipped more than forecast, lowers it after one that shipped less.
pub fn momentum_price(base: f64, previous_fulfilled: Option<Quantity>, forecast: Quantity, step: f64) -> f64 {
    match previous_fulfilled {
        Some(fulfilled) if fulfilled > forecast => base * (1.0 + step),
        Some(fulfilled) if fulfilled < forecast => base * (1.0 - step),
        _ => base,
    }
}
