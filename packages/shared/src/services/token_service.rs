use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::auth::responses::TokenClaims;
use crate::services::errors::token_errors::TokenError;

/// Issues and verifies HS256 bearer tokens carrying a `username` claim.
///
/// Tokens are never stored; a token is valid exactly when its signature
/// matches the process secret and its `exp` has not passed.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        TokenService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.secret_key, config.token_ttl)
    }

    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, Utc::now())
    }

    pub fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = TokenClaims {
            username: Some(username.to_string()),
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let result = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName => TokenError::InvalidSignature,
                _ => TokenError::Malformed(err.to_string()),
            });

        match &result {
            Err(TokenError::Expired) => warn!("Rejected token: expired"),
            Err(TokenError::InvalidSignature) => warn!("Rejected token: invalid signature"),
            Err(TokenError::Malformed(reason)) => warn!("Rejected token: malformed ({})", reason),
            _ => {}
        }
        result
    }

    /// Verifies the token and returns its non-empty `username` claim.
    pub fn username_from_token(&self, token: &str) -> Result<String, TokenError> {
        match self.verify(token)?.username {
            Some(username) if !username.is_empty() => Ok(username),
            _ => {
                warn!("Rejected token: no username claim");
                Err(TokenError::MissingUsername)
            }
        }
    }
}
