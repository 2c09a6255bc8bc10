//! HTTP response DTOs.
//!
//! Accounts are returned as [`Account`](crate::domain::account::Account)
//! directly; this module holds the remaining bodies.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
