//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing the account endpoints on top of
//! [`AccountStorePort`](crate::application::ports::AccountStorePort).

mod classifier;
mod controller;
mod request;
mod response;

pub use classifier::{ErrorOutcome, classify};
pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;
