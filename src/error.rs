//! # error
//!
//! Centralised application error type.
//!
//! Every handler returns `Result<_, AppError>`.  Axum's `IntoResponse` impl
//! converts these into structured JSON error bodies so the dashboard always
//! gets a machine-readable response even on failure.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::engine::margin::MarginError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Platform name outside the fee table.
    #[error(transparent)]
    Margin(#[from] MarginError),

    /// Body missing, not JSON, or not the expected shape. Keeps axum's
    /// status (400 syntax, 415 content type, 422 missing/mistyped field).
    #[error(transparent)]
    Rejected(#[from] JsonRejection),

    /// The request payload was syntactically correct but semantically invalid.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Catch-all for unexpected failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Margin(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {err}"),
            ),
        };

        let body = Json(json!({
            "ok":    false,
            "error": message,
        }));

        (status, body).into_response()
    }
}
