use thiserror::Error;

use crate::services::errors::account_service_errors::AccountServiceError;
use crate::services::errors::token_errors::TokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("Account service error: {0}")]
    AccountServiceError(#[from] AccountServiceError),
    /// Shared by unknown usernames and wrong passwords.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Token(#[from] TokenError),
}
