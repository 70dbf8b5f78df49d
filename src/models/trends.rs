//! # models::trends
//!
//! Keyword trend analysis payloads: search-trend points, the per-axis
//! reports (competition, seasonality) and the combined [`TrendAnalysis`].

use serde::{Deserialize, Serialize};

use crate::models::WholesaleItem;

// ─── Input ────────────────────────────────────────────────────────────────────

/// One point of a shopping-search trend series. `ratio` is on a 0–100
/// scale; `period` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    pub ratio:  f64,
}

/// Body of `POST /api/trends/analyze`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub keyword: String,
    #[serde(default)]
    pub products: Vec<WholesaleItem>,
    /// Oldest first.
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
    /// Number of competing suppliers; defaults to `products.len()`.
    #[serde(default)]
    pub supply_count: Option<u32>,
    /// Monthly search volume; enables ratio-based competition scoring.
    #[serde(default)]
    pub monthly_search_volume: Option<f64>,
}

// ─── Competition ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompetitionLevel {
    #[serde(rename = "블루오션")]
    BlueOcean,
    #[serde(rename = "틈새시장")]
    Niche,
    #[serde(rename = "보통")]
    Moderate,
    #[serde(rename = "경쟁심화")]
    Intense,
    #[serde(rename = "레드오션")]
    RedOcean,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionReport {
    pub keyword:      String,
    pub supply_count: u32,
    pub score:        u8,
    pub level:        CompetitionLevel,
}

// ─── Seasonality ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeasonalityLabel {
    #[serde(rename = "연중 안정")]
    Steady,
    #[serde(rename = "약한 시즌성")]
    WeakSeason,
    #[serde(rename = "시즌성 있음")]
    Seasonal,
    #[serde(rename = "강한 시즌성")]
    StrongSeason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalityReport {
    pub keyword:     String,
    /// Coefficient of variation of the ratios, three decimals.
    pub cv:          f64,
    /// Higher = more stable demand.
    pub score:       u8,
    pub peak_months: Vec<u8>,
    pub label:       SeasonalityLabel,
}

// ─── Combined ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade { S, A, B, C, D }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub keyword:             String,
    pub demand_score:        u8,
    pub competition_score:   u8,
    pub profitability_score: u8,
    pub seasonality_score:   u8,
    pub total_score:         u8,
    pub grade:               Grade,
    pub trend_direction:     TrendDirection,
    pub peak_months:         Vec<u8>,
    pub avg_margin_rate:     f64,
    pub supply_count:        u32,
    pub competition_level:   CompetitionLevel,
    /// supply / monthly searches, two decimals; only with search volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_ratio:   Option<f64>,
}
