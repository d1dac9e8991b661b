// src/agents/planner.rs

use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::tables;
use crate::model::forecast::ForecastTable;
use crate::model::product::{ProductId, Quantity};

pub const PRODUCT_ID_COLUMN: &str = "Product ID";
pub const FORECAST_COLUMN: &str = "forecasted_demand";

/// Serves demand forecasts from the demand forecasting table.
#[derive(Debug, Clone)]
pub struct PlannerAgent {
    pub forecast_file: PathBuf,
    pub data: Option<ForecastTable>,
}

impl PlannerAgent {
    /// Creates the planner and loads its table straight away.
    pub fn new(forecast_file: impl Into<PathBuf>) -> Self {
        let forecast_file = forecast_file.into();
        let data = Self::load_data(&forecast_file);
        Self {
            forecast_file,
            data,
        }
    }

    /// Reads the forecast table.
    ///
    /// Failures are logged and reported as `None`; unparsable forecasts count as 0.
    pub fn load_data(path: &Path) -> Option<ForecastTable> {
        match read_forecast_table(path) {
            Ok(table) => {
                info!("Data loaded successfully ({} rows).", table.len());
                Some(table)
            }
            Err(e) => {
                error!("Error loading data: {e}");
                None
            }
        }
    }

    /// Mean forecasted demand for the product, 0 when unknown or not loaded.
    pub fn get_demand_forecast(&self, product_id: &ProductId) -> Quantity {
        match &self.data {
            Some(table) => table.mean(product_id).unwrap_or(0.0),
            None => {
                warn!("Data not loaded; returning forecast 0.");
                0.0
            }
        }
    }
}

fn read_forecast_table(path: &Path) -> Result<ForecastTable> {
    let mut reader = tables::reader_for(path)?;
    let headers = reader.headers()?.clone();
    let columns = tables::require_columns(path, &headers, &[PRODUCT_ID_COLUMN, FORECAST_COLUMN])?;
    let (id_col, forecast_col) = (columns[0], columns[1]);

    let mut table = ForecastTable::new();
    for record in reader.records() {
        let record = record?;
        let product_id = ProductId::new(record.get(id_col).unwrap_or_default());
        let forecast = record
            .get(forecast_col)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| !value.is_nan())
            .unwrap_or(0.0);
        table.insert(product_id, forecast);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn planner_with(contents: &str) -> (tempfile::TempDir, PlannerAgent) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demand_forecasting.csv");
        fs::write(&path, contents).unwrap();
        let planner = PlannerAgent::new(&path);
        (dir, planner)
    }

    #[test]
    fn forecast_is_mean_of_matching_rows() {
        let (_dir, planner) = planner_with(
            "Product ID,Date,Sales Quantity,forecasted_demand\n\
             1001,2024-01-01,3,4\n\
             1002,2024-01-01,9,10\n\
             1001,2024-01-02,5,6\n",
        );

        assert_eq!(planner.get_demand_forecast(&ProductId::from(1001)), 5.0);
        assert_eq!(planner.get_demand_forecast(&ProductId::from("1002")), 10.0);
    }

    #[test]
    fn unknown_product_forecasts_zero() {
        let (_dir, planner) = planner_with("Product ID,forecasted_demand\n1001,4\n");
        assert_eq!(planner.get_demand_forecast(&ProductId::from(4242)), 0.0);
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let (_dir, planner) = planner_with(" Product ID , forecasted_demand \n1001,8\n");
        assert_eq!(planner.get_demand_forecast(&ProductId::from(1001)), 8.0);
    }

    #[test]
    fn bad_numbers_count_as_zero() {
        let (_dir, planner) = planner_with(
            "Product ID,forecasted_demand\n\
             1001,abc\n\
             1001,\n\
             1001,NaN\n\
             1001,12\n",
        );
        assert_eq!(planner.get_demand_forecast(&ProductId::from(1001)), 3.0);
    }

    #[test]
    fn short_rows_count_as_zero_without_dropping_table() {
        let (_dir, planner) = planner_with(
            "Product ID,Date,Sales Quantity,forecasted_demand\n\
             1001,2024-01-01,3,4\n\
             1001,2024-01-02,5,6\n\
             1002,2024-01-03\n",
        );

        assert!(planner.data.is_some());
        assert_eq!(planner.get_demand_forecast(&ProductId::from(1001)), 5.0);
        assert_eq!(planner.get_demand_forecast(&ProductId::from(1002)), 0.0);
    }

    #[test]
    fn missing_forecast_column_fails_softly() {
        let (_dir, planner) = planner_with("Product ID,Sales Quantity\n1001,4\n");
        assert!(planner.data.is_none());
        assert_eq!(planner.get_demand_forecast(&ProductId::from(1001)), 0.0);
    }

    #[test]
    fn missing_file_fails_softly() {
        let planner = PlannerAgent::new("/nonexistent/demand_forecasting.csv");
        assert!(planner.data.is_none());
        assert_eq!(planner.get_demand_forecast(&ProductId::from(1001)), 0.0);
    }
}
