//! Error taxonomy for the account API.
//!
//! Every failure that reaches a handler resolves to exactly one HTTP status.
//!
//! | Error | Status | Body |
//! |-------|--------|------|
//! | [`ApiError::Validation`] | `400 Bad Request` | `{"code":"INVALID_REQUEST","message":...}` |
//! | [`ApiError::NotFound`] | `404 Not Found` | empty |
//! | [`ApiError::Storage`] | `500 Internal Server Error` | empty |
//!
//! Storage detail is logged, never returned to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::account::AccountError;

/// Error codes exposed by the account API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed request or field rule violation.
    InvalidRequest,
    /// Requested account (or page) does not exist.
    AccountNotFound,
    /// Storage failure.
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Client-caused request failure, raised before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The request could not be decoded into its typed shape.
    #[error("malformed request: {0}")]
    Malformed(String),

    /// A decoded field broke its rule.
    #[error("{field}: {message}")]
    Field {
        /// Wire field name.
        field: String,
        /// Rule that failed.
        message: String,
    },
}

impl ValidationError {
    /// Shorthand for a [`ValidationError::Field`].
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<AccountError> for ValidationError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidValue { field, message } => Self::Field { field, message },
            AccountError::UnsupportedCurrency { code } => Self::Field {
                field: "currency".to_string(),
                message: format!("unsupported currency {code}"),
            },
        }
    }
}

/// Failure of a single request/response exchange.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected by validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Nothing to return: no matching row, or an empty page.
    #[error("not found")]
    NotFound,

    /// Any other backend failure.
    #[error("storage failure: {0}")]
    Storage(StoreError),
}

impl ApiError {
    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::InvalidRequest,
            Self::NotFound => ErrorCode::AccountNotFound,
            Self::Storage(_) => ErrorCode::InternalError,
        }
    }

    /// Get the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.code().http_status()
    }
}

/// API error response body for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: ErrorCode,
    /// Error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(err) => (
                status,
                Json(ApiErrorResponse {
                    code: ErrorCode::InvalidRequest,
                    message: err.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound | Self::Storage(_) => status.into_response(),
        }
    }
}
