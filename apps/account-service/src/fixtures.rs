//! Seeded random fixtures.
//!
//! Every generator owns its RNG and is built from an explicit seed, so a
//! given seed always yields the same sequence of accounts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::account::{Account, Currency, SUPPORTED_CURRENCIES};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Length of generated owner names.
pub const OWNER_LENGTH: usize = 7;

/// Deterministic generator for test accounts.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    rng: StdRng,
}

impl FixtureGenerator {
    /// Create a generator from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Integer in `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Lowercase ASCII string of length `n`.
    pub fn random_string(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| char::from(ALPHABET[self.rng.random_range(0..ALPHABET.len())]))
            .collect()
    }

    /// Owner name.
    pub fn random_owner(&mut self) -> String {
        self.random_string(OWNER_LENGTH)
    }

    /// Balance in `0..=1000`.
    pub fn random_money(&mut self) -> i64 {
        self.random_int(0, 1000)
    }

    /// Any supported currency.
    pub fn random_currency(&mut self) -> Currency {
        SUPPORTED_CURRENCIES[self.rng.random_range(0..SUPPORTED_CURRENCIES.len())]
    }

    /// Account with id in `1..=1000`.
    pub fn random_account(&mut self) -> Account {
        Account {
            id: self.random_int(1, 1000),
            owner: self.random_owner(),
            balance: self.random_money(),
            currency: self.random_currency(),
        }
    }

    /// `n` accounts.
    pub fn random_accounts(&mut self, n: usize) -> Vec<Account> {
        (0..n).map(|_| self.random_account()).collect()
    }
}
