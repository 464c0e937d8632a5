use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

pub mod requests;
pub mod responses;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParsePolicyError {
    #[error("invalid action: {0}; expected \"get_cost\" or \"get_date\"")]
    InvalidAction(String),
}

/// A readable policy attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyField {
    Cost,
    DueDate,
}

impl fmt::Display for PolicyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyField::Cost => write!(f, "policy cost"),
            PolicyField::DueDate => write!(f, "policy due date"),
        }
    }
}

/// Action discriminator accepted by the function endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    GetCost,
    GetDate,
}

impl PolicyAction {
    pub fn field(self) -> PolicyField {
        match self {
            PolicyAction::GetCost => PolicyField::Cost,
            PolicyAction::GetDate => PolicyField::DueDate,
        }
    }
}

impl FromStr for PolicyAction {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get_cost" => Ok(PolicyAction::GetCost),
            "get_date" => Ok(PolicyAction::GetDate),
            other => Err(ParsePolicyError::InvalidAction(other.to_string())),
        }
    }
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyValue {
    Cost(String),
    DueDate(NaiveDate),
}

impl fmt::Display for PolicyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyValue::Cost(cost) => f.write_str(cost),
            PolicyValue::DueDate(date) => write!(f, "{}", date.format(DUE_DATE_FORMAT)),
        }
    }
}
