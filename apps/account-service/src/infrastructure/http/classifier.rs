//! Storage error classification.

use axum::http::StatusCode;

use crate::application::ports::StoreError;
use crate::error::ApiError;

/// HTTP outcome of a failed store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOutcome {
    /// No matching row.
    NotFound,
    /// Any other failure.
    Internal,
}

impl ErrorOutcome {
    /// Response status for this outcome.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Map a store failure to its outcome. Total over [`StoreError`].
#[must_use]
pub const fn classify(err: &StoreError) -> ErrorOutcome {
    match err {
        StoreError::RowNotFound => ErrorOutcome::NotFound,
        StoreError::Unavailable(_)
        | StoreError::ConstraintViolation(_)
        | StoreError::Decode(_)
        | StoreError::Backend(_) => ErrorOutcome::Internal,
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match classify(&err) {
            ErrorOutcome::NotFound => {
                tracing::warn!(error = %err, "Store reported no matching row");
                Self::NotFound
            }
            ErrorOutcome::Internal => {
                tracing::error!(error = %err, "Store call failed");
                Self::Storage(err)
            }
        }
    }
}
