//! # API Errors
//!
//! Error taxonomy surfaced to HTTP clients: "not found" for lookup
//! misses, "bad request" for updates that touch an unexpected number
//! of rows, and a generic server error for store-level failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::observability::Logger;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// No row matches the identifier
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Update affected an unexpected number of rows
    #[error("{0} not updated")]
    NotUpdated(&'static str),

    /// Store-level failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotUpdated(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a catalog failure onto the HTTP taxonomy for `resource`.
    ///
    /// A row lookup miss is an expected outcome and maps to 404;
    /// store failures stay 5xx and are never masked as 404.
    pub fn from_catalog(resource: &'static str, err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => ApiError::NotFound(resource),
            CatalogError::UnexpectedRowCount(_) => ApiError::NotUpdated(resource),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            Logger::error(
                "HTTP_ERROR",
                &[
                    ("error", &self.to_string()),
                    ("status", &status.as_u16().to_string()),
                ],
            );
        }

        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
