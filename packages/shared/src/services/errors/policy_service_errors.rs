use thiserror::Error;

use crate::models::policy::{ParsePolicyError, PolicyField};
use crate::services::errors::account_service_errors::AccountServiceError;

#[derive(Debug, Error)]
pub enum PolicyServiceError {
    #[error("No account found for the authenticated user")]
    AccountNotFound,
    #[error("The {0} is not set for this account")]
    FieldNotSet(PolicyField),
    #[error(transparent)]
    InvalidRequest(#[from] ParsePolicyError),
    #[error("Account service error: {0}")]
    AccountServiceError(AccountServiceError),
}

impl From<AccountServiceError> for PolicyServiceError {
    fn from(error: AccountServiceError) -> Self {
        match error {
            AccountServiceError::AccountNotFound => PolicyServiceError::AccountNotFound,
            other => PolicyServiceError::AccountServiceError(other),
        }
    }
}
