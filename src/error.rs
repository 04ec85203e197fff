//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No record with the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed query parameter or request body
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Backing file is missing, unreadable or malformed
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::InvalidParameter(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::DataUnavailable(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, ApiError>;
