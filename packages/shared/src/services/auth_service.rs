use std::sync::Arc;

use tracing::{info, warn};

use crate::models::auth::responses::LoginResponse;
use crate::services::account_service::AccountService;
use crate::services::credential_verifier::CredentialVerifier;
use crate::services::errors::account_service_errors::AccountServiceError;
use crate::services::errors::auth_service_errors::AuthServiceError;
use crate::services::token_service::TokenService;

pub struct AuthService {
    account_service: Arc<AccountService>,
    token_service: Arc<TokenService>,
    credential_verifier: Arc<dyn CredentialVerifier>,
}

impl AuthService {
    pub fn new(
        account_service: Arc<AccountService>,
        token_service: Arc<TokenService>,
        credential_verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        AuthService {
            account_service,
            token_service,
            credential_verifier,
        }
    }

    /// Checks the credentials and issues a token for the account.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    pub async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Username and password are required".to_string(),
            ));
        }

        let account = match self.account_service.get_account_by_username(username).await {
            Ok(account) => account,
            Err(AccountServiceError::AccountNotFound) => {
                warn!("Login rejected: unknown username {}", username);
                return Err(AuthServiceError::InvalidCredentials);
            }
            Err(err) => return Err(AuthServiceError::AccountServiceError(err)),
        };

        if !self.credential_verifier.verify(password, &account.password) {
            warn!("Login rejected: wrong password for {}", username);
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.token_service.issue(&account.username)?;
        info!("Issued token for {}", account.username);
        Ok(LoginResponse { token })
    }
}
