use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::account::Account;
use crate::models::policy::{PolicyAction, PolicyField, PolicyValue};
use crate::services::account_service::AccountService;
use crate::services::errors::policy_service_errors::PolicyServiceError;

/// Resolves policy fields for an already-authenticated username.
pub struct PolicyService {
    account_service: Arc<AccountService>,
}

impl PolicyService {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        PolicyService { account_service }
    }

    pub async fn get_account(&self, username: &str) -> Result<Account, PolicyServiceError> {
        self.account_service
            .get_account_by_username(username)
            .await
            .map_err(|e| {
                let err = PolicyServiceError::from(e);
                if matches!(err, PolicyServiceError::AccountNotFound) {
                    warn!("No account for authenticated user {}", username);
                }
                err
            })
    }

    pub async fn get_field(
        &self,
        username: &str,
        field: PolicyField,
    ) -> Result<PolicyValue, PolicyServiceError> {
        let account = self.get_account(username).await?;
        select_field(&account, field)
    }

    /// Runs a function-endpoint action. The account is resolved before the
    /// action is parsed, so an unknown account wins over an unknown action.
    pub async fn run_action(
        &self,
        username: &str,
        action: &str,
    ) -> Result<PolicyValue, PolicyServiceError> {
        let account = self.get_account(username).await?;
        let action: PolicyAction = action.parse()?;
        select_field(&account, action.field())
    }
}

pub fn select_field(account: &Account, field: PolicyField) -> Result<PolicyValue, PolicyServiceError> {
    let value = match field {
        PolicyField::Cost => account.policy_cost.clone().map(PolicyValue::Cost),
        PolicyField::DueDate => account.policy_due_date.map(PolicyValue::DueDate),
    };
    match value {
        Some(value) => {
            debug!("Returning {} for {}", field, account.username);
            Ok(value)
        }
        None => {
            warn!("{} not set for {}", field, account.username);
            Err(PolicyServiceError::FieldNotSet(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::policy::ParsePolicyError;
    use crate::repositories::account_repository::MockAccountRepository;
    use crate::repositories::errors::account_repository_errors::AccountRepositoryError;
    use chrono::NaiveDate;

    fn user1() -> Account {
        Account::new(
            "user1",
            "pass1",
            "1212",
            "NT$15000",
            NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
        )
    }

    fn policy_service(account: Option<Account>) -> PolicyService {
        let mut mock_repo = MockAccountRepository::new();
        mock_repo
            .expect_get_account_by_username()
            .returning(move |_| account.clone().ok_or(AccountRepositoryError::NotFound));
        PolicyService::new(Arc::new(AccountService::new(Arc::new(mock_repo))))
    }

    #[tokio::test]
    async fn test_get_cost_and_date() {
        let service = policy_service(Some(user1()));

        let cost = service.get_field("user1", PolicyField::Cost).await.unwrap();
        assert_eq!(cost, PolicyValue::Cost("NT$15000".to_string()));

        let date = service.get_field("user1", PolicyField::DueDate).await.unwrap();
        assert_eq!(date.to_string(), "2025-05-15");
    }

    #[tokio::test]
    async fn test_missing_account_is_not_found() {
        let service = policy_service(None);
        let err = service.get_field("user1", PolicyField::Cost).await.unwrap_err();
        assert!(matches!(err, PolicyServiceError::AccountNotFound));
    }

    #[tokio::test]
    async fn test_unset_field_is_distinct_from_missing_account() {
        let mut account = user1();
        account.policy_cost = None;
        let service = policy_service(Some(account));

        let err = service.get_field("user1", PolicyField::Cost).await.unwrap_err();
        assert!(matches!(
            err,
            PolicyServiceError::FieldNotSet(PolicyField::Cost)
        ));
        assert_ne!(
            err.to_string(),
            PolicyServiceError::AccountNotFound.to_string()
        );

        // The other field is still readable.
        assert!(service.get_field("user1", PolicyField::DueDate).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_action_dispatches() {
        let service = policy_service(Some(user1()));
        assert_eq!(
            service.run_action("user1", "get_cost").await.unwrap(),
            PolicyValue::Cost("NT$15000".to_string())
        );
        assert_eq!(
            service.run_action("user1", "get_date").await.unwrap(),
            PolicyValue::DueDate(NaiveDate::from_ymd_opt(2025, 5, 15).unwrap())
        );
    }

    #[tokio::test]
    async fn test_run_action_rejects_unknown_action() {
        let service = policy_service(Some(user1()));
        let err = service.run_action("user1", "bogus").await.unwrap_err();
        assert!(matches!(
            err,
            PolicyServiceError::InvalidRequest(ParsePolicyError::InvalidAction(ref a)) if a == "bogus"
        ));
        assert!(err.to_string().contains("bogus"));
    }

    #[tokio::test]
    async fn test_run_action_checks_account_before_action() {
        let service = policy_service(None);
        let err = service.run_action("user1", "bogus").await.unwrap_err();
        assert!(matches!(err, PolicyServiceError::AccountNotFound));
    }
}
