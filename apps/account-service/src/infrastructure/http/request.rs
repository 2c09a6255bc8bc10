//! HTTP request shapes and their validation.
//!
//! Each endpoint decodes into a wire shape (`*Request`) and then validates it
//! into a typed command or query. Only validated values reach the store.

use serde::{Deserialize, Serialize};

use crate::application::ports::{CreateAccountParams, ListAccountsParams};
use crate::domain::account::{AccountId, Currency};
use crate::error::ValidationError;

/// Smallest accepted `page_size`.
pub const MIN_PAGE_SIZE: i32 = 5;

/// Largest accepted `page_size`.
pub const MAX_PAGE_SIZE: i32 = 10;

/// Body of `POST /accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    /// Account holder.
    pub owner: String,
    /// ISO currency code.
    pub currency: String,
}

/// Validated account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountCommand {
    /// Account holder, never empty.
    pub owner: String,
    /// Supported currency.
    pub currency: Currency,
}

impl CreateAccountRequest {
    /// Validate into a [`CreateAccountCommand`].
    ///
    /// # Errors
    ///
    /// Reports the first failing field: `owner`, then `currency`.
    pub fn validate(self) -> Result<CreateAccountCommand, ValidationError> {
        if self.owner.is_empty() {
            return Err(ValidationError::field("owner", "is required"));
        }
        let currency = self.currency.parse::<Currency>()?;

        Ok(CreateAccountCommand {
            owner: self.owner,
            currency,
        })
    }
}

impl CreateAccountCommand {
    /// Store parameters. New accounts always open with balance 0.
    #[must_use]
    pub fn into_params(self) -> CreateAccountParams {
        CreateAccountParams {
            owner: self.owner,
            balance: 0,
            currency: self.currency,
        }
    }
}

/// Validate the `{id}` path segment.
///
/// # Errors
///
/// Returns a field error for ids below 1.
pub fn validate_account_id(raw: i64) -> Result<AccountId, ValidationError> {
    Ok(AccountId::new(raw)?)
}

/// Query string of `GET /accounts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAccountsRequest {
    /// One-based page number.
    pub page_id: i32,
    /// Rows per page.
    pub page_size: i32,
}

/// Validated paging request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAccountsQuery {
    page_id: i32,
    page_size: i32,
}

impl ListAccountsRequest {
    /// Validate into a [`ListAccountsQuery`].
    ///
    /// # Errors
    ///
    /// `page_id` below 1 or `page_size` outside `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`
    /// is rejected, not clamped.
    pub fn validate(self) -> Result<ListAccountsQuery, ValidationError> {
        if self.page_id < 1 {
            return Err(ValidationError::field("page_id", "must be at least 1"));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ValidationError::field(
                "page_size",
                format!("must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"),
            ));
        }

        Ok(ListAccountsQuery {
            page_id: self.page_id,
            page_size: self.page_size,
        })
    }
}

impl ListAccountsQuery {
    /// One-based page number.
    #[must_use]
    pub const fn page_id(&self) -> i32 {
        self.page_id
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> i32 {
        self.page_size
    }

    /// Store parameters: `limit = page_size`, `offset = (page_id - 1) * page_size`.
    ///
    /// Computed in 64 bits, so no `i32` page can overflow.
    #[must_use]
    pub fn params(&self) -> ListAccountsParams {
        let limit = i64::from(self.page_size);
        ListAccountsParams {
            limit,
            offset: (i64::from(self.page_id) - 1) * limit,
        }
    }
}
