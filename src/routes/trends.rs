//! # routes::trends
//!
//! | Method | Path                        | Description                                  |
//! |--------|-----------------------------|----------------------------------------------|
//! | POST   | `/api/trends/profitability` | ให้คะแนน keyword จากราคาส่งที่ถูกที่สุด           |
//! | POST   | `/api/trends/analyze`       | demand + competition + profitability + season |

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    engine::{profitability::analyze_profitability, scoring::analyze_trend},
    error::AppError,
    models::{AnalyzeRequest, ProfitabilityRequest, TrendPoint, WholesaleItem},
    routes::ensure_price,
    state::SharedState,
};

// ─── POST /api/trends/profitability ───────────────────────────────────────────

pub async fn keyword_profitability(
    State(state): State<SharedState>,
    payload: Result<Json<ProfitabilityRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let keyword = require_keyword(&req.keyword)?;
    ensure_product_prices(&req.products)?;

    let report = analyze_profitability(keyword, &req.products, &state.config.profitability);
    state.record_calculation();

    info!(
        keyword,
        samples = report.sample_count,
        score   = report.score,
        "📈 keyword profitability scored"
    );

    let mut body = serde_json::to_value(&report).map_err(anyhow::Error::from)?;
    body["ok"] = json!(true);
    Ok(Json(body))
}

// ─── POST /api/trends/analyze ─────────────────────────────────────────────────

pub async fn analyze_keyword(
    State(state): State<SharedState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let keyword = require_keyword(&req.keyword)?;
    ensure_product_prices(&req.products)?;
    ensure_trend(&req.trend)?;
    if let Some(volume) = req.monthly_search_volume {
        ensure_price("monthlySearchVolume", volume)?;
    }

    let analysis = analyze_trend(keyword, &req, &state.config.profitability);
    state.record_calculation();

    info!(
        keyword,
        total = analysis.total_score,
        grade = ?analysis.grade,
        trend = ?analysis.trend_direction,
        "📊 keyword analysed"
    );

    let mut body = serde_json::to_value(&analysis).map_err(anyhow::Error::from)?;
    body["ok"] = json!(true);
    Ok(Json(body))
}

// ─── Validation ───────────────────────────────────────────────────────────────

fn require_keyword(raw: &str) -> Result<&str, AppError> {
    let keyword = raw.trim();
    if keyword.is_empty() {
        return Err(AppError::BadRequest("keyword is required".into()));
    }
    Ok(keyword)
}

fn ensure_product_prices(products: &[WholesaleItem]) -> Result<(), AppError> {
    products
        .iter()
        .enumerate()
        .try_for_each(|(i, p)| ensure_price(&format!("products[{i}].price"), p.price))
}

/// ratio อยู่ในสเกล 0–100
fn ensure_trend(trend: &[TrendPoint]) -> Result<(), AppError> {
    trend
        .iter()
        .enumerate()
        .try_for_each(|(i, p)| ensure_price(&format!("trend[{i}].ratio"), p.ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_keyword_trims() {
        assert_eq!(require_keyword("  캠핑의자 ").unwrap(), "캠핑의자");
        assert!(matches!(require_keyword(" \t"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_product_prices_must_be_non_negative() {
        let item = |price| WholesaleItem { name: "a".into(), price };
        assert!(ensure_product_prices(&[item(0.0), item(1e308)]).is_ok());

        let err = ensure_product_prices(&[item(10.0), item(-5.0)]).unwrap_err();
        assert!(err.to_string().contains("products[1].price"));
    }
}
