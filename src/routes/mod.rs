//! HTTP surface. [`router`] is shared by `main` and the router tests.

pub mod health;
pub mod margin;
pub mod trends;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{auth::require_api_key, error::AppError, state::SharedState};

pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // ── Margin Calculator ─────────────────────────────────────────────────
        .route("/margin",                    post(margin::calculate_margin))
        .route("/margin/breakdown",          post(margin::margin_breakdown))
        .route("/api/platforms",             get(margin::list_platforms))
        // ── Trends ────────────────────────────────────────────────────────────
        .route("/api/trends/profitability",  post(trends::keyword_profitability))
        .route("/api/trends/analyze",        post(trends::analyze_keyword))
        // ── Ops ───────────────────────────────────────────────────────────────
        .route("/health",                    get(health::health_check))
        // ── Middleware ────────────────────────────────────────────────────────
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// ราคา/ค่าใช้จ่ายต้องไม่ติดลบ (0 ได้)
pub(crate) fn ensure_price(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}
