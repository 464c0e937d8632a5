pub mod account_repository;
pub mod errors;
