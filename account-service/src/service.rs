//! Account service implementation

use std::sync::Arc;

use common::decimal::Amount;
use common::error::{Error, Result};
use common::model::account::{Account, Operation};
use tracing::{debug, info};

use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Account service holding the ledger rules on top of the account store
pub struct AccountService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Create a new account service backed by the in-memory store
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
        }
    }

    /// Create a new account service with a specific repository
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Open a new account for the given CPF
    pub async fn open_account(&self, cpf: String, name: String) -> Result<Account> {
        info!("Opening account for cpf {}", cpf);
        self.repo.create_account(cpf, name).await
    }

    /// Get an account by CPF
    pub async fn find_account(&self, cpf: &str) -> Result<Option<Account>> {
        self.repo.find_by_cpf(cpf).await
    }

    /// Deposit funds into an account
    pub async fn deposit(
        &self,
        cpf: &str,
        description: Option<String>,
        amount: Amount,
    ) -> Result<Operation> {
        info!("Depositing {} into account {}", amount, cpf);

        if amount.is_sign_negative() {
            return Err(Error::InvalidAmount(amount));
        }

        // Ensure the account exists before touching the statement
        self.require_account(cpf).await?;

        let operation = Operation::credit(amount, description);
        self.repo.append_operation(cpf, operation.clone()).await?;
        Ok(operation)
    }

    /// Withdraw funds from an account
    ///
    /// The balance check runs against a snapshot of the statement and the
    /// debit is appended in a second store call, so concurrent withdrawals
    /// against the same account can interleave between the two steps.
    pub async fn withdraw(&self, cpf: &str, amount: Amount) -> Result<Operation> {
        info!("Withdrawing {} from account {}", amount, cpf);

        if amount.is_sign_negative() {
            return Err(Error::InvalidAmount(amount));
        }

        let account = self.require_account(cpf).await?;
        let balance = account.balance();
        if balance < amount {
            debug!("Rejecting withdrawal of {} against balance {}", amount, balance);
            return Err(Error::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        let operation = Operation::debit(amount);
        self.repo.append_operation(cpf, operation.clone()).await?;
        Ok(operation)
    }

    /// Update the holder name of an account
    pub async fn update_name(&self, cpf: &str, name: String) -> Result<()> {
        info!("Renaming account {}", cpf);
        self.repo.update_name(cpf, name).await
    }

    /// Close an account and return the accounts that remain
    pub async fn close_account(&self, cpf: &str) -> Result<Vec<Account>> {
        info!("Closing account {}", cpf);
        self.repo.remove(cpf).await?;
        self.repo.list().await
    }

    /// Look up an account, mapping a missing CPF to `AccountNotFound`
    async fn require_account(&self, cpf: &str) -> Result<Account> {
        self.repo
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| Error::AccountNotFound(cpf.to_string()))
    }
}
