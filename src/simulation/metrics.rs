// src/simulation/metrics.rs

//! Run-level performance indicators.

use crate::model::records::SimulationRow;

/// Share of periods where the forecast exceeded what was actually sold.
pub fn stockout_rate(sales: &[f64], forecast: &[f64]) -> Option<f64> {
    if sales.is_empty() {
        return None;
    }
    let stockouts = sales.iter().zip(forecast).filter(|(s, f)| f > s).count();
    Some(stockouts as f64 / sales.len() as f64)
}

pub fn turnover_rate(total_sales: f64, avg_inventory: f64) -> Option<f64> {
    (avg_inventory != 0.0).then(|| total_sales / avg_inventory)
}

pub fn profit_margin(revenue: f64, cost: f64) -> Option<f64> {
    (revenue != 0.0).then(|| (revenue - cost) / revenue)
}

/// Indicators over all report rows of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rows: usize,
    pub units_fulfilled: f64,
    pub revenue: f64,
    pub stockout_rate: Option<f64>,
    pub turnover_rate: Option<f64>,
    /// Margin of the charged prices over the pricing table's base price.
    pub profit_margin: Option<f64>,
}

impl RunSummary {
    pub fn from_rows(rows: &[SimulationRow], base_price: f64) -> Self {
        let sales: Vec<f64> = rows.iter().map(|r| r.units_fulfilled).collect();
        let forecast: Vec<f64> = rows.iter().map(|r| r.forecasted_demand).collect();
        let units_fulfilled: f64 = sales.iter().sum();
        let revenue: f64 = rows.iter().map(|r| r.price * r.units_fulfilled).sum();
        let avg_inventory = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| r.stock_before).sum::<f64>() / rows.len() as f64
        };

        Self {
            rows: rows.len(),
            units_fulfilled,
            revenue,
            stockout_rate: stockout_rate(&sales, &forecast),
            turnover_rate: turnover_rate(units_fulfilled, avg_inventory),
            profit_margin: profit_margin(revenue, base_price * units_fulfilled),
        }
    }
}
