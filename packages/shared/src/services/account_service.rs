use std::sync::Arc;

use tracing::{error, info};

use crate::models::account::Account;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::errors::account_repository_errors::AccountRepositoryError;
use crate::services::errors::account_service_errors::AccountServiceError;

pub struct AccountService {
    repository: Arc<dyn AccountRepository + Send + Sync>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository + Send + Sync>) -> Self {
        AccountService { repository }
    }

    pub async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Account, AccountServiceError> {
        if username.is_empty() {
            return Err(AccountServiceError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_account_by_username(username)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::NotFound => AccountServiceError::AccountNotFound,
                _ => AccountServiceError::RepositoryError(e.to_string()),
            })
    }

    /// Inserts the account or replaces the one with the same username.
    ///
    /// Rejects a policy number that is already held by a different username.
    pub async fn upsert_account(&self, account: &Account) -> Result<(), AccountServiceError> {
        if account.username.is_empty() || account.policy_number.is_empty() {
            return Err(AccountServiceError::ValidationError(
                "Username and policy number cannot be empty".to_string(),
            ));
        }

        match self
            .repository
            .get_account_by_policy_number(&account.policy_number)
            .await
        {
            Ok(holder) if holder.username != account.username => {
                return Err(AccountServiceError::PolicyNumberTaken {
                    policy_number: account.policy_number.clone(),
                    owner: holder.username,
                });
            }
            Ok(_) | Err(AccountRepositoryError::NotFound) => {}
            Err(e) => return Err(AccountServiceError::RepositoryError(e.to_string())),
        }

        let exists = match self
            .repository
            .get_account_by_username(&account.username)
            .await
        {
            Ok(_) => true,
            Err(AccountRepositoryError::NotFound) => false,
            Err(e) => return Err(AccountServiceError::RepositoryError(e.to_string())),
        };
        if exists {
            info!("Updating account: {}", account.username);
        } else {
            info!("Creating account: {}", account.username);
        }

        self.repository
            .put_account(account)
            .await
            .map_err(|e| AccountServiceError::RepositoryError(e.to_string()))
    }

    /// Prepares the store and writes the given seed accounts.
    ///
    /// A failure to prepare the table aborts; a failure on a single seed is
    /// logged and the remaining seeds are still written. Returns how many
    /// seeds were written.
    pub async fn bootstrap(&self, seeds: &[Account]) -> Result<usize, AccountServiceError> {
        info!("Preparing accounts table");
        self.repository
            .ensure_table()
            .await
            .map_err(|e| AccountServiceError::RepositoryError(e.to_string()))?;

        info!("Seeding {} accounts", seeds.len());
        let mut written = 0;
        for seed in seeds {
            match self.upsert_account(seed).await {
                Ok(()) => written += 1,
                Err(e) => error!("Failed to seed account {}: {}", seed.username, e),
            }
        }
        info!("Account bootstrap complete ({}/{} written)", written, seeds.len());
        Ok(written)
    }
}
