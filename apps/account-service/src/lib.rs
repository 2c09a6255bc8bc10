// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Account Service - Rust Core Library
//!
//! Account resources (create, fetch-by-id, paginated list) over HTTP for the
//! Simple Bank system.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: `Account` entity and its value objects (`AccountId`, `Currency`)
//!
//! - **Application**: Port definitions
//!   - `ports`: `AccountStorePort`, the only way handlers reach storage
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: Request validation, handlers, storage error classification
//!   - `persistence`: `PostgreSQL` store and the programmable mock store
//!
//! # Request pipeline
//!
//! ```text
//! HTTP request → decode → validate → AccountStorePort → classify → status + JSON
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business types with no external dependencies.
pub mod domain;

/// Application layer - Port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// API error taxonomy.
pub mod error;

/// Tracing subscriber setup.
pub mod observability;

/// Seeded random fixtures for tests and local data.
pub mod fixtures;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::ports::{
    AccountStorePort, CreateAccountParams, ListAccountsParams, StoreError,
};
pub use domain::account::{Account, AccountId, Currency};
pub use error::{ApiError, ErrorCode};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{MockAccountStore, PostgresAccountStore};
