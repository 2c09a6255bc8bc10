//! Application Layer
//!
//! Port definitions that the HTTP handlers depend on. Handlers never see a
//! concrete storage type, only [`ports::AccountStorePort`].

pub mod ports;
