//! # routes::margin
//!
//! Margin calculator endpoints
//!
//! | Method | Path                | Description                          |
//! |--------|---------------------|--------------------------------------|
//! | POST   | `/margin`           | net profit + margin % ของ 1 สินค้า    |
//! | POST   | `/margin/breakdown` | แยกค่าใช้จ่าย ค่าส่ง/แพ็ค/โฆษณา        |
//! | GET    | `/api/platforms`    | ตารางค่าคอมมิชชั่น                    |

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::{
    engine::margin::{evaluate, evaluate_breakdown},
    error::AppError,
    models::{BreakdownRequest, CostInputs, MarginRequest, Platform, DEFAULT_PRICE_MULTIPLIER},
    routes::ensure_price,
    state::SharedState,
};

// ─── POST /margin ─────────────────────────────────────────────────────────────

pub async fn calculate_margin(
    State(state): State<SharedState>,
    payload: Result<Json<MarginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    ensure_price("wholesalePrice", req.wholesale_price)?;
    ensure_price("sellingPrice", req.selling_price)?;
    let result = evaluate(req.wholesale_price, req.selling_price, &req.platform)?;

    state.record_calculation();
    debug!(
        platform       = %req.platform,
        wholesale      = req.wholesale_price,
        selling        = req.selling_price,
        net_profit     = result.net_profit,
        margin_percent = result.margin_percent,
        "💰 margin calculated"
    );

    Ok(Json(json!({
        "ok":            true,
        "platform":      req.platform,
        "netProfit":     result.net_profit,
        "marginPercent": result.margin_percent,
    })))
}

// ─── POST /margin/breakdown ───────────────────────────────────────────────────

pub async fn margin_breakdown(
    State(state): State<SharedState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let platform: Platform = req.platform.parse()?;

    // ยังไม่ตั้งราคาขาย → ใช้ราคาส่ง × ตัวคูณ
    let selling_price = match req.selling_price {
        Some(price) => price,
        None => {
            let multiplier = req.price_multiplier.unwrap_or(DEFAULT_PRICE_MULTIPLIER);
            ensure_price("priceMultiplier", multiplier)?;
            req.wholesale_price * multiplier
        }
    };

    let inputs = CostInputs {
        wholesale_price: req.wholesale_price,
        selling_price,
        platform,
        shipping_cost:   req.shipping_cost.unwrap_or(state.config.default_shipping_cost),
        packaging_cost:  req.packaging_cost.unwrap_or(state.config.default_packaging_cost),
        ad_cost:         req.ad_cost.unwrap_or(0.0),
    };

    ensure_price("wholesalePrice", inputs.wholesale_price)?;
    ensure_price("sellingPrice", inputs.selling_price)?;
    ensure_price("shippingCost", inputs.shipping_cost)?;
    ensure_price("packagingCost", inputs.packaging_cost)?;
    ensure_price("adCost", inputs.ad_cost)?;

    let breakdown = evaluate_breakdown(&inputs);
    state.record_calculation();
    debug!(%platform, net_profit = breakdown.net_profit, "💰 breakdown calculated");

    let mut body = serde_json::to_value(&breakdown).map_err(anyhow::Error::from)?;
    body["ok"] = json!(true);
    Ok(Json(body))
}

// ─── GET /api/platforms ───────────────────────────────────────────────────────

pub async fn list_platforms() -> impl IntoResponse {
    let platforms: Vec<_> = Platform::ALL
        .iter()
        .map(|p| json!({ "platform": p, "feeRate": p.fee_rate() }))
        .collect();

    Json(json!({ "ok": true, "platforms": platforms }))
}
