use serde::{Deserialize, Serialize};

use super::PolicyValue;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PolicyCostResponse {
    pub policy_cost: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PolicyDateResponse {
    pub policy_due_date: String,
}

/// Envelope consumed by function-calling clients. `error_message` is always
/// present and is empty on success.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FunctionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_date: Option<String>,
    pub error_message: String,
}

impl FunctionResponse {
    pub fn success(value: &PolicyValue) -> Self {
        let rendered = value.to_string();
        let (policy_cost, policy_date) = match value {
            PolicyValue::Cost(_) => (Some(rendered), None),
            PolicyValue::DueDate(_) => (None, Some(rendered)),
        };
        FunctionResponse {
            policy_cost,
            policy_date,
            error_message: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        FunctionResponse {
            policy_cost: None,
            policy_date: None,
            error_message: message.into(),
        }
    }
}
