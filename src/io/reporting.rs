// src/io/reporting.rs

use log::info;
use std::fs;
use std::path::Path;

use crate::error::{InventoryError, Result};
use crate::model::records::SimulationRow;

/// Writes the simulation rows to a CSV file, creating the parent directory if needed.
///
/// # Arguments
/// * `path` - The path to save the file (e.g., "docs/simulation_report.csv").
/// * `rows` - Every (day, product) row recorded by the simulation.
pub fn write_report(path: &Path, rows: &[SimulationRow]) -> Result<()> {
    if rows.is_empty() {
        return Err(InventoryError::EmptyReport);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!("Exported {} rows to '{}'", rows.len(), path.display());
    Ok(())
}

/// Reads a report written by [`write_report`].
pub fn read_report(path: &Path) -> Result<Vec<SimulationRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let rows = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<SimulationRow>, csv::Error>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::ProductId;
    use chrono::NaiveDate;

    fn sample_rows() -> Vec<SimulationRow> {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        vec![
            SimulationRow {
                date,
                product_id: ProductId::from(9286),
                forecasted_demand: 133.33,
                price: 64.79,
                stock_before: 500.0,
                units_fulfilled: 173.33,
                stock_after: 326.67,
            },
            SimulationRow {
                date: date.succ_opt().unwrap(),
                product_id: ProductId::from(2605),
                forecasted_demand: 0.0,
                price: 1.0,
                stock_before: 0.0,
                units_fulfilled: 0.0,
                stock_after: 0.0,
            },
        ]
    }

    #[test]
    fn report_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("simulation_report.csv");
        let rows = sample_rows();

        write_report(&path, &rows).unwrap();

        assert_eq!(read_report(&path).unwrap(), rows);
    }

    #[test]
    fn report_has_expected_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_report(&path, &sample_rows()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "Date,Product ID,Forecasted Demand,Price,Stock Before,Units Fulfilled,Stock After"
        );
        assert!(contents.contains("2026-10-19,9286,133.33,64.79,500.0,173.33,326.67"));
    }

    #[test]
    fn empty_report_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        assert!(matches!(write_report(&path, &[]), Err(InventoryError::EmptyReport)));
        assert!(!path.exists());
    }
}
