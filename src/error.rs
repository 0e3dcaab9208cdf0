//! Handler error type.
//!
//! Every handler returns `Result<T, ApiError>`. Upstream and storage failures
//! are logged with full detail, but the client only ever sees a flat
//! `{"error": "..."}` object with a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected before any upstream or storage call.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The upstream search call or the follow-up write failed.
    #[error("search failed: {0:#}")]
    Search(#[source] anyhow::Error),

    /// Reading stored records failed.
    #[error("results query failed: {0}")]
    Results(#[source] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ApiError::Search(e) => {
                tracing::error!(error = ?e, "search request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch repositories".to_string(),
                )
            }
            ApiError::Results(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch results".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
