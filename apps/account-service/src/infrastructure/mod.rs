//! Infrastructure Layer
//!
//! Adapters connecting the application to the outside world:
//!
//! - [`http`]: Axum REST adapter (inbound)
//! - [`persistence`]: Account store implementations (outbound)

pub mod http;
pub mod persistence;
