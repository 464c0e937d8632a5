use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountServiceError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Policy number {policy_number} already belongs to {owner}")]
    PolicyNumberTaken {
        policy_number: String,
        owner: String,
    },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}
