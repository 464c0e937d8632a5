use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One customer account and the policy attached to it.
///
/// `policy_cost` and `policy_due_date` are always written by the bootstrap,
/// but a stored item may still lack them, so reads treat both as optional.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub policy_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_due_date: Option<NaiveDate>,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        policy_number: impl Into<String>,
        policy_cost: impl Into<String>,
        policy_due_date: NaiveDate,
    ) -> Self {
        Account {
            username: username.into(),
            password: password.into(),
            policy_number: policy_number.into(),
            policy_cost: Some(policy_cost.into()),
            policy_due_date: Some(policy_due_date),
        }
    }
}

/// Fixed test accounts written at startup.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            username: "user1".to_string(),
            password: "pass1".to_string(),
            policy_number: "1212".to_string(),
            policy_cost: Some("NT$15000".to_string()),
            policy_due_date: NaiveDate::from_ymd_opt(2025, 5, 15),
        },
        Account {
            username: "user2".to_string(),
            password: "pass2".to_string(),
            policy_number: "3434".to_string(),
            policy_cost: Some("NT$20000".to_string()),
            policy_due_date: NaiveDate::from_ymd_opt(2025, 6, 20),
        },
    ]
}
