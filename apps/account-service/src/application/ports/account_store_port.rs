//! Account Store Port (Driven Port)
//!
//! Interface for persisting and retrieving accounts. Implemented by the
//! `PostgreSQL` adapter and by the programmable mock used in handler tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account::{Account, Currency};

/// Parameters for inserting a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountParams {
    /// Account holder.
    pub owner: String,
    /// Opening balance.
    pub balance: i64,
    /// Account currency.
    pub currency: Currency,
}

/// Parameters for reading one page of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAccountsParams {
    /// Maximum number of rows.
    pub limit: i64,
    /// Zero-based row offset.
    pub offset: i64,
}

/// Failures reported by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No row matched the query.
    #[error("no matching row")]
    RowNotFound,

    /// The backend could not be reached or the connection was lost.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A database constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// A row could not be mapped to an [`Account`].
    #[error("failed to decode row: {0}")]
    Decode(String),

    /// Any other backend failure.
    #[error("store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether this error signals "no matching row".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RowNotFound)
    }
}

/// Port for account persistence.
///
/// Each handler invocation calls at most one of these methods, exactly once.
#[async_trait]
pub trait AccountStorePort: Send + Sync {
    /// Insert an account and return it as stored.
    async fn create_account(&self, params: CreateAccountParams) -> Result<Account, StoreError>;

    /// Fetch an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] if no account has this id.
    async fn get_account(&self, id: i64) -> Result<Account, StoreError>;

    /// Fetch a page of accounts ordered by id.
    async fn list_accounts(&self, params: ListAccountsParams) -> Result<Vec<Account>, StoreError>;
}
