pub mod account_service_errors;
pub mod auth_service_errors;
pub mod policy_service_errors;
pub mod token_errors;
