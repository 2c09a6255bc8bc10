//! Account Bounded Context
//!
//! Accounts are created once (balance 0) and read back by id or page.
//! Transfers and balance updates are not part of this context.

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::Account;
pub use errors::AccountError;
pub use value_objects::{AccountId, Currency, SUPPORTED_CURRENCIES};
