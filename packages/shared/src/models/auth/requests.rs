use serde::{Deserialize, Serialize};

/// Login body. Both fields are optional at the wire level so a missing field
/// surfaces as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
