//! # models::profitability
//!
//! Payloads for keyword-level profitability scoring.

use serde::{Deserialize, Serialize};

/// A wholesale listing sampled for a keyword.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WholesaleItem {
    pub name:  String,
    pub price: f64,
}

/// Body of `POST /api/trends/profitability`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfitabilityRequest {
    pub keyword:  String,
    #[serde(default)]
    pub products: Vec<WholesaleItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityReport {
    pub keyword:                 String,
    pub avg_wholesale_price:     f64,
    /// Average margin rate (%), one decimal.
    pub avg_margin_rate:         f64,
    pub recommended_price_range: PriceRange,
    /// 20..=100, or 0 when there was nothing to sample.
    pub score:                   u8,
    pub sample_count:            usize,
}

impl ProfitabilityReport {
    pub fn empty(keyword: &str) -> Self {
        Self {
            keyword:                 keyword.to_string(),
            avg_wholesale_price:     0.0,
            avg_margin_rate:         0.0,
            recommended_price_range: PriceRange::default(),
            score:                   0,
            sample_count:            0,
        }
    }
}
