//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use insights_core::InsightsError;
use tracing::error;

/// Error surfaced to API clients as `{"detail": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }
}

impl From<InsightsError> for ApiError {
    fn from(err: InsightsError) -> Self {
        ApiError::internal(format!("Analysis failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed ({}): {}", self.status, self.detail);
        (
            self.status,
            Json(serde_json::json!({
                "detail": self.detail
            })),
        )
            .into_response()
    }
}
