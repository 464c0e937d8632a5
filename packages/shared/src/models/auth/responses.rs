use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub username: Option<String>,
    pub exp: i64, // expiration time
    pub iat: i64, // issued at
}
