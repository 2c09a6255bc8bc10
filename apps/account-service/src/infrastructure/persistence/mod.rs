//! Persistence Adapters
//!
//! Implementations of [`AccountStorePort`](crate::application::ports::AccountStorePort).

pub mod mock;
pub mod postgres;

pub use mock::{Matcher, MockAccountStore, StoreCall};
pub use postgres::PostgresAccountStore;
