pub mod account_service;
pub mod auth_service;
pub mod credential_verifier;
pub mod errors;
pub mod policy_service;
pub mod token_service;
