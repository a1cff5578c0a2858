use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Malformed parameter: {field} ({reason})")]
    MalformedParameter { field: String, reason: String },

    #[error("Invalid input: {field} {constraint} (got {value})")]
    InvalidInput {
        field: String,
        constraint: String,
        value: String,
    },

    #[error("Numeric error: {0}")]
    NumericInvariant(String),

    #[error("Balance overflow: balance {balance} in month {month} exceeds the cap of {cap} (check rate, term and contributions)")]
    BalanceOverflow {
        month: u32,
        balance: Decimal,
        cap: Decimal,
    },

    #[error("Invalid limits: {field} ({reason})")]
    InvalidLimits { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse failure classes, used to label failures outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Malformed,
    Validation,
    Calculation,
    Configuration,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Malformed => "malformed",
            ErrorKind::Validation => "validation",
            ErrorKind::Calculation => "calculation",
            ErrorKind::Configuration => "configuration",
        }
    }
}

impl ScheduleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::MalformedParameter { .. } | ScheduleError::Serialization(_) => {
                ErrorKind::Malformed
            }
            ScheduleError::InvalidInput { .. } => ErrorKind::Validation,
            ScheduleError::NumericInvariant(_) | ScheduleError::BalanceOverflow { .. } => {
                ErrorKind::Calculation
            }
            ScheduleError::InvalidLimits { .. } => ErrorKind::Configuration,
        }
    }
}

impl From<serde_json::Error> for ScheduleError {
    fn from(e: serde_json::Error) -> Self {
        ScheduleError::Serialization(e.to_string())
    }
}
