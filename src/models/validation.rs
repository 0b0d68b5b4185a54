use serde::{Deserialize, Serialize};

/// One failed booking rule, returned to the caller in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: u8,
    pub message: String,
}

/// The booking rules an appointment is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    CenterExists,
    DateFormat,
    NoDateConflict,
}

impl Rule {
    pub fn code(self) -> u8 {
        match self {
            Rule::CenterExists => 1,
            Rule::DateFormat => 2,
            Rule::NoDateConflict => 3,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rule::CenterExists => "Center does not exist",
            Rule::DateFormat => "Date is not in valid format. Please format date as yyyy-dd-MM",
            Rule::NoDateConflict => "An appointment already exists at that center for that date.",
        }
    }
}

impl From<Rule> for ValidationError {
    fn from(rule: Rule) -> Self {
        ValidationError {
            code: rule.code(),
            message: rule.message().to_string(),
        }
    }
}
