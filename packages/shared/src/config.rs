use std::path::PathBuf;

use chrono::Duration;
use thiserror::Error;

pub const DEFAULT_SECRET_KEY: &str = "your_secret_key";
pub const DEFAULT_ACCOUNTS_TABLE: &str = "accounts";
pub const DEFAULT_PORT: u16 = 88;
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Process-wide settings, built once in `main` and handed to every service
/// that needs them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub secret_key: String,
    /// DynamoDB endpoint override, e.g. `http://localhost:8000` for DynamoDB Local.
    /// `None` leaves endpoint resolution to the AWS SDK.
    pub database_url: Option<String>,
    pub accounts_table: String,
    pub debug: bool,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub token_ttl: Duration,
}

impl AppConfig {
    /// Reads configuration from the process environment, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("SECRET_KEY")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let debug = lookup("DEBUG")
            .map(|raw| raw.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Ok(AppConfig {
            secret_key,
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            accounts_table: lookup("ACCOUNTS_TABLE")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ACCOUNTS_TABLE.to_string()),
            debug,
            port,
            frontend_dir: PathBuf::from(
                lookup("FRONTEND_DIR").unwrap_or_else(|| DEFAULT_FRONTEND_DIR.to_string()),
            ),
            token_ttl: Duration::hours(1),
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
