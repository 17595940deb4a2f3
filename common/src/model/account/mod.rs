//! Account models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Amount;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Kind of a statement operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum OperationKind {
    /// Deposit, increases the balance
    Credit,
    /// Withdrawal, decreases the balance
    Debit,
}

/// A single statement entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Operation {
    /// Whether the entry credits or debits the account
    #[serde(rename = "type")]
    pub kind: OperationKind,
    /// Operation amount, never negative
    pub amount: Amount,
    /// Free-form description, recorded on credits only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Create a credit entry stamped with the current time
    pub fn credit(amount: Amount, description: Option<String>) -> Self {
        Self {
            kind: OperationKind::Credit,
            amount,
            description,
            created_at: Utc::now(),
        }
    }

    /// Create a debit entry stamped with the current time
    pub fn debit(amount: Amount) -> Self {
        Self {
            kind: OperationKind::Debit,
            amount,
            description: None,
            created_at: Utc::now(),
        }
    }
}

/// Account model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Account {
    /// Unique account ID
    pub id: Uuid,
    /// Tax identifier, unique across all accounts
    pub cpf: String,
    /// Holder display name
    pub name: String,
    /// Statement entries in insertion order
    pub statement: Vec<Operation>,
}

impl Account {
    /// Create a new account with a fresh random id and an empty statement
    pub fn new(cpf: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf,
            name,
            statement: Vec::new(),
        }
    }

    /// Current balance derived from the statement
    pub fn balance(&self) -> Amount {
        balance(&self.statement)
    }
}

/// Fold a statement into its balance: credits add, debits subtract.
///
/// The balance is never stored; it is always recomputed from the statement,
/// so the statement remains the single source of truth.
pub fn balance(statement: &[Operation]) -> Amount {
    statement
        .iter()
        .fold(Amount::ZERO, |acc, operation| match operation.kind {
            OperationKind::Credit => acc + operation.amount,
            OperationKind::Debit => acc - operation.amount,
        })
}
