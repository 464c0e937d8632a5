pub mod account_repository_errors;
