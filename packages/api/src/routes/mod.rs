pub mod auth;
pub mod frontend;
pub mod health;
pub mod policy;
