//! Account entity.

use serde::{Deserialize, Serialize};

use super::value_objects::Currency;

/// A bank account as persisted by the store.
///
/// The wire shape is `{id, owner, balance, currency}`; decoding an encoded
/// account yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier.
    pub id: i64,
    /// Account holder.
    pub owner: String,
    /// Balance in minor units.
    pub balance: i64,
    /// Account currency.
    pub currency: Currency,
}
