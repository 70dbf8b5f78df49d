//! # auth — API Key Middleware
//!
//! ป้องกัน Endpoint ด้วย `X-API-Key` header
//!
//! ## Mode
//! - `API_KEY` ไม่ได้ตั้ง (หรือ empty) → **Allow All** (Dev Mode)
//! - `API_KEY` ตั้งค่า → ต้องส่ง `X-API-Key: <key>` ทุก Request
//!
//! ## ยกเว้น
//! `/health` ไม่ต้อง Auth
//!
//! ## Usage
//! ```bash
//! API_KEY=super-secret-key-here cargo run
//! ```
//! ```bash
//! curl -H "X-API-Key: super-secret-key-here" \
//!      -d '{"wholesalePrice":100,"sellingPrice":150,"platform":"rocket"}' \
//!      -H 'Content-Type: application/json' http://localhost:3000/margin
//! ```

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::state::SharedState;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Axum middleware — ตรวจสอบ X-API-Key header เทียบกับ `Config::api_key`
pub async fn require_api_key(
    State(state): State<SharedState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // ── Dev Mode: ไม่มี API_KEY → ยอมให้ผ่านหมด ─────────────────────────────
    let Some(expected) = state.config.api_key.as_deref() else {
        return next.run(request).await;
    };

    // ── ยกเว้น Health Check ───────────────────────────────────────────────────
    let path = request.uri().path();
    if path == "/health" {
        return next.run(request).await;
    }

    // ── ตรวจสอบ Header ────────────────────────────────────────────────────────
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if provided == expected {
        next.run(request).await
    } else {
        warn!(path, "❌ Unauthorized request — invalid or missing X-API-Key");
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "ok":    false,
                "error": "Unauthorized: invalid or missing X-API-Key header",
                "hint":  "Set X-API-Key header with your API key"
            })),
        )
            .into_response()
    }
}
