use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use policy_shared::models::account::Account;
use policy_shared::repositories::account_repository::AccountRepository;
use policy_shared::repositories::errors::account_repository_errors::AccountRepositoryError;

/// Account store backed by a map keyed on username.
#[derive(Clone, Default)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let map = accounts
            .into_iter()
            .map(|account| (account.username.clone(), account))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn all(&self) -> Vec<Account> {
        self.accounts.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn ensure_table(&self) -> Result<(), AccountRepositoryError> {
        Ok(())
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Account, AccountRepositoryError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(username)
            .cloned()
            .ok_or(AccountRepositoryError::NotFound)
    }

    async fn get_account_by_policy_number(
        &self,
        policy_number: &str,
    ) -> Result<Account, AccountRepositoryError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|account| account.policy_number == policy_number)
            .cloned()
            .ok_or(AccountRepositoryError::NotFound)
    }

    async fn put_account(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.username.clone(), account.clone());
        Ok(())
    }
}
