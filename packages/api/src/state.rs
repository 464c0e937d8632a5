use std::sync::Arc;

use policy_shared::config::AppConfig;
use policy_shared::repositories::account_repository::AccountRepository;
use policy_shared::services::account_service::AccountService;
use policy_shared::services::auth_service::AuthService;
use policy_shared::services::credential_verifier::PlaintextCredentialVerifier;
use policy_shared::services::policy_service::PolicyService;
use policy_shared::services::token_service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub policy_service: Arc<PolicyService>,
}

impl AppState {
    /// Wires every service on top of the given account store.
    pub fn new(config: &AppConfig, repository: Arc<dyn AccountRepository + Send + Sync>) -> Self {
        let account_service = Arc::new(AccountService::new(repository));
        let token_service = Arc::new(TokenService::from_config(config));
        let auth_service = Arc::new(AuthService::new(
            account_service.clone(),
            token_service.clone(),
            Arc::new(PlaintextCredentialVerifier),
        ));
        let policy_service = Arc::new(PolicyService::new(account_service.clone()));

        AppState {
            account_service,
            auth_service,
            token_service,
            policy_service,
        }
    }
}
