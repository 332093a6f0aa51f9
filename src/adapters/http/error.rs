//! Shared API error mapping.
//!
//! Domain errors carry structured codes; the HTTP layer maps them to
//! statuses here. Infrastructure failures are logged and surfaced as a
//! generic "try again" message, never leaking internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::MetricsError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest(msg) => ErrorResponse::new("BAD_REQUEST", msg.clone()),
            ApiError::NotFound(msg) => ErrorResponse::new("NOT_FOUND", msg.clone()),
            ApiError::Unauthorized(msg) => ErrorResponse::new("UNAUTHORIZED", msg.clone()),
            ApiError::Forbidden(msg) => ErrorResponse::new("FORBIDDEN", msg.clone()),
            ApiError::Internal => ErrorResponse::new(
                "INTERNAL_ERROR",
                "Something went wrong. Please try again.",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error.code {
            ErrorCode::ValidationFailed | ErrorCode::IncompleteAssessment => {
                ApiError::BadRequest(error.message)
            }
            ErrorCode::ProfileNotFound
            | ErrorCode::AssessmentNotFound
            | ErrorCode::DecisionNotFound
            | ErrorCode::AutomationNotFound => ApiError::NotFound(error.message),
            ErrorCode::Unauthorized => ApiError::Unauthorized(error.message),
            ErrorCode::Forbidden => ApiError::Forbidden(error.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                tracing::error!(code = %error.code, "request failed: {}", error.message);
                ApiError::Internal
            }
        }
    }
}

impl From<MetricsError> for ApiError {
    fn from(error: MetricsError) -> Self {
        match error {
            MetricsError::Database(msg) => {
                tracing::error!("metrics read failed: {}", msg);
                ApiError::Internal
            }
        }
    }
}
