//! # models::margin
//!
//! Request / result payloads for the margin calculator endpoints.
//!
//! All wire names are camelCase to match the dashboard client
//! (`wholesalePrice`, `sellingPrice`, `marginPercent`, ...).

use serde::{Deserialize, Serialize};

use crate::models::Platform;

// ─── MarginRequest ────────────────────────────────────────────────────────────

/// Body of `POST /margin`.
///
/// `platform` stays a raw string here so an unknown channel surfaces as
/// `InvalidPlatform` (400) instead of a generic JSON rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginRequest {
    pub wholesale_price: f64,
    pub selling_price:   f64,
    pub platform:        String,
}

// ─── MarginResult ─────────────────────────────────────────────────────────────

/// Net profit and margin for a single (wholesale, selling, platform) triple.
///
/// Values are unrounded; display code rounds to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginResult {
    pub net_profit:     f64,
    pub margin_percent: f64,
}

// ─── Breakdown ────────────────────────────────────────────────────────────────

/// Mark-up applied when the calculator page has no selling price yet.
pub const DEFAULT_PRICE_MULTIPLIER: f64 = 2.5;

/// Body of `POST /margin/breakdown`. Missing costs fall back to the
/// configured defaults; a missing `sellingPrice` becomes
/// `wholesalePrice × priceMultiplier`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRequest {
    pub wholesale_price:  f64,
    #[serde(default)]
    pub selling_price:    Option<f64>,
    #[serde(default)]
    pub price_multiplier: Option<f64>,
    pub platform:         String,
    #[serde(default)]
    pub shipping_cost:    Option<f64>,
    #[serde(default)]
    pub packaging_cost:   Option<f64>,
    #[serde(default)]
    pub ad_cost:          Option<f64>,
}

/// Fully-resolved cost inputs for [`crate::engine::margin::evaluate_breakdown`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostInputs {
    pub wholesale_price: f64,
    pub selling_price:   f64,
    pub platform:        Platform,
    pub shipping_cost:   f64,
    pub packaging_cost:  f64,
    pub ad_cost:         f64,
}

/// Itemised margin picture shown on the calculator page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginBreakdown {
    pub wholesale_price:  f64,
    pub selling_price:    f64,
    pub platform:         Platform,
    pub fee_rate:         f64,
    /// `selling_price × fee_rate`
    pub commission:       f64,
    pub shipping_cost:    f64,
    pub packaging_cost:   f64,
    pub ad_cost:          f64,
    pub net_profit:       f64,
    pub margin_percent:   f64,
    /// Return on ad spend in percent; 0 when no ad cost.
    pub roas:             f64,
    /// Lowest selling price at which net profit reaches zero.
    pub break_even_price: f64,
}
