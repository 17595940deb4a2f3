//! Common types and utilities for the ledger
//!
//! This library contains shared types and abstractions used by the account
//! service and the API gateway. It provides a unified approach to error
//! handling and the domain models.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
