//! Repository for account data

use async_trait::async_trait;
use common::error::{Error, Result};
use common::model::account::{Account, Operation};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Account repository trait defining the interface for account data storage
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Create a new account, failing when the CPF is already registered
    async fn create_account(&self, cpf: String, name: String) -> Result<Account>;

    /// Get an account by CPF
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Account>>;

    /// Append an operation to an account statement
    async fn append_operation(&self, cpf: &str, operation: Operation) -> Result<()>;

    /// Update the holder name of an account
    async fn update_name(&self, cpf: &str, name: String) -> Result<()>;

    /// Remove an account by CPF
    async fn remove(&self, cpf: &str) -> Result<()>;

    /// Get all accounts currently in the store
    async fn list(&self) -> Result<Vec<Account>>;
}

/// In-memory repository for account data
pub struct InMemoryAccountRepository {
    /// Accounts by CPF
    pub accounts: DashMap<String, Account>,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    /// Create a new account
    async fn create_account(&self, cpf: String, name: String) -> Result<Account> {
        // The entry API keeps the uniqueness check and the insert atomic
        match self.accounts.entry(cpf) {
            Entry::Occupied(entry) => Err(Error::DuplicateAccount(entry.key().clone())),
            Entry::Vacant(entry) => {
                let account = Account::new(entry.key().clone(), name);
                entry.insert(account.clone());
                Ok(account)
            }
        }
    }

    /// Get an account by CPF
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Account>> {
        Ok(self.accounts.get(cpf).map(|a| a.clone()))
    }

    /// Append an operation to an account statement
    async fn append_operation(&self, cpf: &str, operation: Operation) -> Result<()> {
        let mut account = self
            .accounts
            .get_mut(cpf)
            .ok_or_else(|| Error::AccountNotFound(cpf.to_string()))?;

        account.statement.push(operation);
        Ok(())
    }

    /// Update the holder name of an account
    async fn update_name(&self, cpf: &str, name: String) -> Result<()> {
        let mut account = self
            .accounts
            .get_mut(cpf)
            .ok_or_else(|| Error::AccountNotFound(cpf.to_string()))?;

        account.name = name;
        Ok(())
    }

    /// Remove an account by CPF
    ///
    /// Removal is keyed, so it can never touch a neighbouring entry.
    async fn remove(&self, cpf: &str) -> Result<()> {
        self.accounts
            .remove(cpf)
            .map(|_| ())
            .ok_or_else(|| Error::AccountNotFound(cpf.to_string()))
    }

    /// Get all accounts currently in the store
    async fn list(&self) -> Result<Vec<Account>> {
        Ok(self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}
