//! Account domain errors.

use std::fmt;

/// Errors raised while constructing account value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name as it appears on the wire.
        field: String,
        /// Error message.
        message: String,
    },

    /// Currency code is well-formed but not supported.
    UnsupportedCurrency {
        /// The rejected code.
        code: String,
    },
}

impl AccountError {
    /// Shorthand for an [`AccountError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The wire field this error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidValue { field, .. } => field,
            Self::UnsupportedCurrency { .. } => "currency",
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for {field}: {message}")
            }
            Self::UnsupportedCurrency { code } => {
                write!(f, "Unsupported currency: {code}")
            }
        }
    }
}

impl std::error::Error for AccountError {}
