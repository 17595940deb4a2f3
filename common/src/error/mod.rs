//! Error types for the ledger
//!
//! This module provides a unified error handling system for the account
//! service and the API gateway. The variants cover every way a ledger
//! operation can be refused; the gateway decides how each one maps onto
//! an HTTP response.

use thiserror::Error;

use crate::decimal::Amount;

/// Ledger error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error when an account is opened with a CPF that is already registered
    #[error("Account already exists for cpf: {0}")]
    DuplicateAccount(String),

    /// Error when no account matches the supplied CPF
    #[error("Account not found for cpf: {0}")]
    AccountNotFound(String),

    /// Error when a withdrawal exceeds the current balance
    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the withdrawal attempt
        balance: Amount,
        /// Amount the caller tried to withdraw
        requested: Amount,
    },

    /// Error when an operation carries a negative amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
