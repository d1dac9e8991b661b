// src/model/product.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Units of stock. Forecasts are means, so quantities are fractional.
pub type Quantity = f64;

/// Opaque product identifier.
///
/// Tables key products by number, but lookups compare the textual form,
/// so `1001` and `"1001"` refer to the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// Rounds to two decimals, the precision used for prices and report values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
