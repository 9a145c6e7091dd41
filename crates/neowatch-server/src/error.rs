//! API error taxonomy

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to the dashboard as a JSON `error` payload.
///
/// The dashboard keys off the `error` field and a server-error status; it
/// owns any retry or fallback-to-static behavior, so nothing is retried
/// here.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body missing or malformed; raised before any computation runs
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Arithmetic produced an unusable value
    #[error("computation failed: {0}")]
    Computation(String),
}

impl From<neowatch_core::ImpactError> for ApiError {
    fn from(err: neowatch_core::ImpactError) -> Self {
        ApiError::Computation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("request failed: {self}");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
