mod agents;
mod error;
mod io;
mod model;
mod simulation;

use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::InventorySimulation;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("{}", "=".repeat(60));
    println!("[Main] Starting Inventory Optimization");
    println!("{}", "=".repeat(60));

    // 1. SETUP CONFIGURATION
    // Tables are read from the working directory, outputs land in ./docs.
    let config = SimulationConfig::default();
    let days = config.simulation_days;

    // 2. RUN SIMULATION
    let outcome = match InventorySimulation::new(config).run() {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("[Main] {e}. Exiting.");
            return;
        }
    };

    // 3. PRINT SUMMARY
    let summary = &outcome.summary;
    println!("\n=== Run Summary ({days} days) ===");
    println!("Opening store order: {:?}", outcome.opening_order);
    if let Some(last) = outcome.rows.last() {
        println!("Rows recorded: {} (through {})", summary.rows, last.date);
    }
    println!(
        "Charts drawn: {} daily, {} behavior",
        outcome.day_charts.len(),
        outcome.behavior_charts.len()
    );
    println!("Units fulfilled: {:.2}", summary.units_fulfilled);
    println!("Revenue: ${:.2}", summary.revenue);
    if let Some(rate) = summary.stockout_rate {
        println!("Stockout rate: {:.1}%", rate * 100.0);
    }
    if let Some(turnover) = summary.turnover_rate {
        println!("Turnover rate: {turnover:.2}");
    }
    if let Some(margin) = summary.profit_margin {
        println!("Margin over base price: {:.1}%", margin * 100.0);
    }

    println!("\nReport: {}", outcome.report_path.display());
    println!("Page: {}", outcome.page_path.display());
    println!("\nSimulation complete. Report and visuals are ready in the docs/ folder.");
}
