use serde::{Deserialize, Serialize};

/// Body of the function endpoint, e.g. `{"action": "get_cost"}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FunctionRequest {
    #[serde(default)]
    pub action: Option<String>,
}
