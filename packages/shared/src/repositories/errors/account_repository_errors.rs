use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountRepositoryError {
    #[error("Account not found")]
    NotFound,
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("DynamoDB error: {0}")]
    DynamoDb(String),
    #[error("Table {0} did not become active")]
    TableNotReady(String),
}
