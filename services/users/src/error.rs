//! Custom error types for the user service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors raised by the service layer
#[derive(Error, Debug)]
pub enum UserError {
    /// No live user has the requested id
    #[error("User not found: {0}")]
    NotFound(i64),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Type alias for service results
pub type UserResult<T> = Result<T, UserError>;

/// Custom error type for the HTTP layer
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Payload failed its validation rules
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Resource not found
    #[error("User not found: {0}")]
    NotFound(i64),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::NotFound(id) => ApiError::NotFound(id),
            UserError::Database(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Validation(errors) => {
                let details = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let codes: Vec<String> =
                            errors.iter().map(|err| err.code.to_string()).collect();
                        (field.to_string(), json!(codes))
                    })
                    .collect::<serde_json::Map<_, _>>();

                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Request validation failed",
                        "details": details,
                    }),
                )
            }
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("User not found: {}", id) }),
            ),
            ApiError::InternalServerError(reason) => {
                tracing::error!("Internal server error: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Database error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
