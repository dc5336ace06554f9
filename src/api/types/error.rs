//! Wire-format error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::{DomainError, FieldError};

/// Error body sent to clients: a human-readable status label and message
/// plus the numeric status code, and per-field errors for validation
/// failures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status: String,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                status: label.into(),
                message: message.into(),
                status_code: status.as_u16(),
                errors: None,
            },
        }
    }

    /// Attach per-field errors
    pub fn with_field_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.body.errors = Some(errors);
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad request", message)
    }

    /// Validation error with per-field details
    pub fn unprocessable(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Unprocessable entity",
            message,
        )
        .with_field_errors(errors)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", message)
    }

    /// Permission error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden", message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found", message)
    }

    /// Internal server error. Never carries internal detail to the client.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "Something went wrong",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { errors } => {
                Self::unprocessable("Validation failed", errors)
            }
            // Duplicate emails surface as a generic 400, matching the
            // observed transport behavior.
            DomainError::DuplicateEmail { .. } => Self::bad_request("Registration unsuccessful"),
            DomainError::AuthenticationFailed => Self::unauthorized("Authentication failed"),
            DomainError::Forbidden { message } => Self::forbidden(message),
            DomainError::Internal { message } | DomainError::Storage { message } => {
                tracing::error!(error = %message, "internal error");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.body.status_code, self.body.message)
    }
}

impl std::error::Error for ApiError {}
