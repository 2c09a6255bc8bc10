//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod account_store_port;

pub use account_store_port::{
    AccountStorePort, CreateAccountParams, ListAccountsParams, StoreError,
};
