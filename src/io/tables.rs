// src/io/tables.rs

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::info;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use crate::error::{InventoryError, Result};
use crate::model::product::ProductId;
use crate::model::records::{InventoryRecord, InventoryRow, PricingRecord, PricingRow};

const INVENTORY_COLUMNS: [&str; 4] = [
    "Product ID",
    "Stock Levels",
    "Reorder Point",
    "Supplier Lead Time (days)",
];
const PRICING_COLUMNS: [&str; 4] = ["Product ID", "Elasticity Index", "Competitor Prices", "Price"];

/// Opens a comma-delimited table with a header row.
///
/// Headers and cells are trimmed. Rows may be shorter or longer than the header.
pub fn reader_for(path: &Path) -> Result<Reader<File>> {
    Ok(ReaderBuilder::new().trim(Trim::All).flexible(true).from_path(path)?)
}

/// Returns the index of each required column, in the order asked for.
pub fn require_columns(path: &Path, headers: &StringRecord, required: &[&str]) -> Result<Vec<usize>> {
    let mut indices = Vec::with_capacity(required.len());
    let mut missing = Vec::new();

    for name in required {
        match headers.iter().position(|h| h == *name) {
            Some(index) => indices.push(index),
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(InventoryError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        })
    }
}

fn load_table<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let mut reader = reader_for(path)?;
    let headers = reader.headers()?.clone();
    require_columns(path, &headers, required)?;

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Inventory rows; cells that do not parse are kept as `None` until the row is used.
pub fn load_inventory(path: &Path) -> Result<Vec<InventoryRow>> {
    load_table(path, &INVENTORY_COLUMNS)
}

pub fn load_pricing(path: &Path) -> Result<Vec<PricingRow>> {
    load_table(path, &PRICING_COLUMNS)
}

/// First inventory row for the product, which must have every value.
pub fn find_inventory(rows: &[InventoryRow], product_id: &ProductId) -> Result<InventoryRecord> {
    rows.iter()
        .find(|r| &r.product_id == product_id)
        .ok_or_else(|| InventoryError::ProductNotFound {
            table: "Inventory",
            product: product_id.clone(),
        })?
        .complete()
}

/// First pricing row for the product, which must have every value.
pub fn find_pricing(rows: &[PricingRow], product_id: &ProductId) -> Result<PricingRecord> {
    rows.iter()
        .find(|r| &r.product_id == product_id)
        .ok_or_else(|| InventoryError::ProductNotFound {
            table: "Pricing",
            product: product_id.clone(),
        })?
        .complete()
}

/// Up to `limit` distinct product IDs, in the order they first appear.
pub fn unique_product_ids(records: &[InventoryRow], limit: usize) -> Vec<ProductId> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.product_id.clone()))
        .map(|r| r.product_id.clone())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const INVENTORY: &str = "Product ID,Store ID,Stock Levels,Reorder Point,Supplier Lead Time (days)\n\
        9286,16,700,132,22\n\
        2605,60,82,127,1\n\
        9286,21,300,50,3\n\
        2859,55,145,192,2\n\
        2374,24,151,19,5\n";

    fn write_table(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn inventory_rows_ignore_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "inventory.csv", INVENTORY);

        let records = load_inventory(&path).unwrap();
        assert_eq!(records.len(), 5);

        let row = find_inventory(&records, &ProductId::from(9286)).unwrap();
        assert_eq!(row.stock_level, 700);
        assert_eq!(row.reorder_point, 132);
        assert_eq!(row.lead_time_days, 22);
    }

    #[test]
    fn unique_ids_keep_first_seen_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "inventory.csv", INVENTORY);
        let records = load_inventory(&path).unwrap();

        let ids = unique_product_ids(&records, 3);
        assert_eq!(
            ids,
            vec![ProductId::from(9286), ProductId::from(2605), ProductId::from(2859)]
        );
    }

    #[test]
    fn pricing_lookup_reports_unknown_product() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            &dir,
            "pricing.csv",
            "Product ID,Price,Competitor Prices,Elasticity Index\n9502,53.99,56.48,1.72\n",
        );
        let records = load_pricing(&path).unwrap();

        let row = find_pricing(&records, &ProductId::from(9502)).unwrap();
        assert_eq!(row.base_price, 53.99);
        assert_eq!(row.elasticity, 1.72);

        let err = find_pricing(&records, &ProductId::from(1)).unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotFound { table: "Pricing", .. }));
    }

    #[test]
    fn missing_columns_are_named() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "inventory.csv", "Product ID,Stock Levels\n1,2\n");

        match load_inventory(&path) {
            Err(InventoryError::MissingColumns { missing, .. }) => {
                assert_eq!(missing, vec!["Reorder Point", "Supplier Lead Time (days)"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn unusable_cells_only_fail_the_selected_product() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            &dir,
            "inventory.csv",
            "Product ID,Stock Levels,Reorder Point,Supplier Lead Time (days)\n\
             2605,,20,1\n\
             9286,120,50,3\n\
             2859,n/a,192\n",
        );

        let rows = load_inventory(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(unique_product_ids(&rows, 3).len(), 3);

        assert_eq!(find_inventory(&rows, &ProductId::from(9286)).unwrap().stock_level, 120);
        assert!(matches!(
            find_inventory(&rows, &ProductId::from(2605)),
            Err(InventoryError::IncompleteRecord { column: "Stock Levels", .. })
        ));
        assert!(matches!(
            find_inventory(&rows, &ProductId::from(2859)),
            Err(InventoryError::IncompleteRecord { column: "Stock Levels", .. })
        ));
    }

    #[test]
    fn padded_ids_and_values_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(
            &dir,
            "pricing.csv",
            "Product ID,Price,Competitor Prices,Elasticity Index\n 9502 , 53.99 ,56.48, -0.5\n",
        );

        let rows = load_pricing(&path).unwrap();
        let row = find_pricing(&rows, &ProductId::from(9502)).unwrap();

        assert_eq!(row.base_price, 53.99);
        assert_eq!(row.elasticity, -0.5);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_pricing(Path::new("/nonexistent/pricing.csv")).is_err());
    }
}
