// src/io/demand.rs

use csv::{StringRecord, Writer};
use log::info;
use std::cmp::Ordering;
use std::path::Path;

use crate::agents::planner::{FORECAST_COLUMN, PRODUCT_ID_COLUMN};
use crate::error::Result;
use crate::io::tables;

pub const DATE_COLUMN: &str = "Date";
pub const SALES_COLUMN: &str = "Sales Quantity";

/// Rows averaged by the rolling forecast.
const ROLLING_WINDOW: usize = 3;

/// Adds the forecast column to a raw demand table if it is not there yet.
///
/// Returns `true` when the table was rewritten.
pub fn ensure_forecast_column(path: &Path) -> Result<bool> {
    let has_forecast = {
        let mut reader = tables::reader_for(path)?;
        let found = reader.headers()?.iter().any(|h| h == FORECAST_COLUMN);
        found
    };
    if has_forecast {
        return Ok(false);
    }
    generate_rolling_forecast(path)?;
    Ok(true)
}

/// Rewrites a demand table with a rolling-average forecast column.
///
/// Rows are sorted by product and date. Within each product the forecast for
/// a row is the mean sales of the window ending one row later, so it looks one
/// day ahead. The last row of a product has no forecast and is left blank.
pub fn generate_rolling_forecast(path: &Path) -> Result<()> {
    let mut reader = tables::reader_for(path)?;
    let headers = reader.headers()?.clone();
    let columns = tables::require_columns(path, &headers, &[PRODUCT_ID_COLUMN, DATE_COLUMN, SALES_COLUMN])?;
    let (id_col, date_col, sales_col) = (columns[0], columns[1], columns[2]);
    let old_forecast_col = headers.iter().position(|h| h == FORECAST_COLUMN);

    let mut rows = reader.records().collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()?;
    drop(reader);
    rows.sort_by(|a, b| {
        compare_ids(field(a, id_col), field(b, id_col)).then_with(|| field(a, date_col).cmp(field(b, date_col)))
    });

    let sales: Vec<Option<f64>> = rows
        .iter()
        .map(|r| field(r, sales_col).parse::<f64>().ok().filter(|v| !v.is_nan()))
        .collect();

    let mut forecasts = Vec::with_capacity(rows.len());
    let mut start = 0;
    while start < rows.len() {
        let product = field(&rows[start], id_col);
        let end = start + rows[start..].iter().take_while(|r| field(r, id_col) == product).count();
        forecasts.extend(rolling_forecast(&sales[start..end]));
        start = end;
    }

    let mut writer = Writer::from_path(path)?;
    let width = headers.len();
    writer.write_record(without_column(&headers, width, old_forecast_col).chain([FORECAST_COLUMN]))?;
    for (row, forecast) in rows.iter().zip(forecasts) {
        let forecast = forecast.map(|v| v.to_string()).unwrap_or_default();
        writer.write_record(without_column(row, width, old_forecast_col).chain([forecast.as_str()]))?;
    }
    writer.flush()?;

    info!("Forecasted demand column added to {} ({} rows)", path.display(), rows.len());
    Ok(())
}

/// One-step-ahead rolling mean for a single product's sales history.
fn rolling_forecast(sales: &[Option<f64>]) -> Vec<Option<f64>> {
    (0..sales.len())
        .map(|i| {
            let last = i + 1;
            if last >= sales.len() {
                return None;
            }
            let first = (last + 1).saturating_sub(ROLLING_WINDOW);
            let window: Vec<f64> = sales[first..=last].iter().flatten().copied().collect();
            if window.is_empty() {
                None
            } else {
                Some(window.iter().sum::<f64>() / window.len() as f64)
            }
        })
        .collect()
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default().trim()
}

/// The record cut or padded to `width` cells, minus the `skip` column.
fn without_column(record: &StringRecord, width: usize, skip: Option<usize>) -> impl Iterator<Item = &str> {
    (0..width)
        .filter(move |i| Some(*i) != skip)
        .map(move |i| record.get(i).unwrap_or_default())
}

/// Numeric IDs sort numerically, anything else lexically.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
