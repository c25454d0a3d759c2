use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use market_mock_core::errors::QueryError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Transport-level error: maps core query failures onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client fault: missing or invalid query parameters
    #[error("{0}")]
    BadRequest(String),

    /// Server fault: unexpected failure inside the core
    #[error("{0}")]
    Internal(String),
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::MissingParameter(_) | QueryError::InvalidDate(_) => {
                ApiError::BadRequest(e.to_string())
            }
            QueryError::Internal(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
