//! Account value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::AccountError;

/// Store-assigned account identifier.
///
/// Always strictly positive; zero and negative ids are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Create an account id.
    ///
    /// # Errors
    ///
    /// Returns error if `value` is not greater than zero.
    pub fn new(value: i64) -> Result<Self, AccountError> {
        if value <= 0 {
            return Err(AccountError::invalid("id", "must be greater than 0"));
        }
        Ok(Self(value))
    }

    /// Get the raw id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = AccountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Currencies an account may be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Canadian dollar.
    Cad,
    /// Indonesian rupiah.
    Idr,
    /// Singapore dollar.
    Sgd,
}

/// Every supported currency, in declaration order.
pub const SUPPORTED_CURRENCIES: [Currency; 5] = [
    Currency::Usd,
    Currency::Eur,
    Currency::Cad,
    Currency::Idr,
    Currency::Sgd,
];

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Cad => "CAD",
            Self::Idr => "IDR",
            Self::Sgd => "SGD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = AccountError;

    /// Codes are matched exactly; `"usd"` is not `USD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AccountError::invalid("currency", "is required"));
        }
        SUPPORTED_CURRENCIES
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| AccountError::UnsupportedCurrency {
                code: s.to_string(),
            })
    }
}
