//! Error types for the inventory simulation.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::product::ProductId;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required columns {missing:?} are missing in {}", .path.display())]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("Could not load forecasting data from {}", .path.display())]
    ForecastDataUnavailable { path: PathBuf },

    #[error("Forecast unavailable or invalid for Product ID {product}: {value}")]
    ForecastUnavailable { product: ProductId, value: f64 },

    #[error("{table} data not found for Product ID {product}")]
    ProductNotFound {
        table: &'static str,
        product: ProductId,
    },

    #[error("{table} data for Product ID {product} has no usable '{column}'")]
    IncompleteRecord {
        table: &'static str,
        product: ProductId,
        column: &'static str,
    },

    #[error("Simulation produced no report rows")]
    EmptyReport,

    #[error("Chart rendering error: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
