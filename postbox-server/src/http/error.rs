//! API error types with IntoResponse
//!
//! Every error becomes `{"error": "<message>"}`. Storage failures are
//! logged in full and reported to the client with a fixed message only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request body was not usable JSON (400)
    InvalidBody(String),

    /// Storage failure (500, logged)
    Storage {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Adapter for `map_err` that tags a storage failure with the
    /// client-facing message.
    pub fn storage(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidBody(reason) => reason,
            Self::Storage { message, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{}", message);
                message.to_owned()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
