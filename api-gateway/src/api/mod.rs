//! API handlers
//!
//! This module contains all the API endpoint handlers organized by resource.
//! Each handler follows a consistent pattern:
//! - Extract state, caller identity and parameters using Axum extractors
//! - Validate input parameters
//! - Call the appropriate service methods
//! - Map the result straight to the wire format

pub mod account;
pub mod statement;
pub mod transaction;
