//! HTTP error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fanout_application::RunFanOutError;
use serde_json::json;
use tracing::error;

/// Error returned by API handlers, rendered as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    /// Request was well-formed JSON but semantically invalid
    Validation(String),
    /// The upstream endpoint failed or returned garbage
    Upstream(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::Validation(m) | ApiError::Upstream(m) | ApiError::Internal(m) => m,
        }
    }
}

impl From<RunFanOutError> for ApiError {
    fn from(e: RunFanOutError) -> Self {
        match &e {
            _ if e.is_validation() => ApiError::Validation(e.to_string()),
            RunFanOutError::StrategyFailed { .. } | RunFanOutError::ComparisonFailed(_) => {
                ApiError::Upstream(e.to_string())
            }
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("  Request failed ({}): {}", status.as_u16(), self.message());
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
