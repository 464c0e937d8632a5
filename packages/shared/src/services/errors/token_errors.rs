use thiserror::Error;

/// Why a token was not accepted, or why one could not be produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is malformed: {0}")]
    Malformed(String),
    #[error("token does not carry a username")]
    MissingUsername,
    #[error("failed to sign token: {0}")]
    Signing(String),
}
