//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use thiserror::Error;

use super::validation::FieldError;

/// Errors surfaced by API handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid form data")]
    Validation(Vec<FieldError>),

    #[error("Malformed request body: {0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid form data", "details": details })),
            )
                .into_response(),
            ApiError::BadRequest(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid form data",
                    "details": [FieldError::new("body", reason)],
                })),
            )
                .into_response(),
            ApiError::NotFound(what) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": what }))).into_response()
            }
            ApiError::Internal(reason) => {
                tracing::error!("Request failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Turns a handler panic into a generic 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(reason).into_response()
}
