//! Domain Layer
//!
//! The innermost layer containing business types with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Entities**: `Account`, identified by a store-assigned id
//! - **Value Objects**: Immutable domain types with equality by value
//!
//! # Bounded Contexts
//!
//! - [`account`]: Account identity, ownership and currency

pub mod account;
