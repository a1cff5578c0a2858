use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::types::{Money, Percent};
use crate::ScheduleResult;

pub const DEFAULT_MAX_PRINCIPAL: Money = dec!(1_000_000_000);
pub const DEFAULT_MAX_CONTRIBUTION: Money = dec!(100_000_000);
pub const DEFAULT_MAX_MONTHS: u32 = 600;
pub const DEFAULT_MAX_RATE: Percent = dec!(200);
pub const DEFAULT_MAX_BALANCE_CAP: Money = dec!(1_000_000_000_000);

// Ceilings keep balance * monthly rate well inside Decimal's ~7.9e28 range.
const MONEY_CEILING: Money = dec!(1_000_000_000_000_000_000_000_000);
const RATE_CEILING: Percent = dec!(10_000);
const MONTHS_CEILING: u32 = 12_000;

/// Upper bounds every request is validated against.
///
/// Built once at start-up and shared read-only by every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_principal: Money,
    pub max_contribution: Money,
    pub max_months: u32,
    /// Maximum annual rate in percent.
    pub max_rate: Percent,
    /// Compounding fails once a balance exceeds this value.
    pub max_balance_cap: Money,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_principal: DEFAULT_MAX_PRINCIPAL,
            max_contribution: DEFAULT_MAX_CONTRIBUTION,
            max_months: DEFAULT_MAX_MONTHS,
            max_rate: DEFAULT_MAX_RATE,
            max_balance_cap: DEFAULT_MAX_BALANCE_CAP,
        }
    }
}

impl Limits {
    pub fn new(
        max_principal: Money,
        max_contribution: Money,
        max_months: u32,
        max_rate: Percent,
        max_balance_cap: Money,
    ) -> ScheduleResult<Self> {
        let limits = Limits {
            max_principal,
            max_contribution,
            max_months,
            max_rate,
            max_balance_cap,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Reject bounds that are non-positive or too large to compute with.
    pub fn validate(&self) -> ScheduleResult<()> {
        check_bound("max_principal", self.max_principal, MONEY_CEILING)?;
        check_bound("max_contribution", self.max_contribution, MONEY_CEILING)?;
        check_bound("max_rate", self.max_rate, RATE_CEILING)?;
        check_bound("max_balance_cap", self.max_balance_cap, MONEY_CEILING)?;
        if self.max_months == 0 || self.max_months > MONTHS_CEILING {
            return Err(ScheduleError::InvalidLimits {
                field: "max_months".into(),
                reason: format!("must be between 1 and {MONTHS_CEILING}"),
            });
        }
        Ok(())
    }
}

fn check_bound(field: &str, value: Decimal, ceiling: Decimal) -> ScheduleResult<()> {
    if value <= Decimal::ZERO {
        return Err(ScheduleError::InvalidLimits {
            field: field.into(),
            reason: format!("must be positive, got {value}"),
        });
    }
    if value > ceiling {
        return Err(ScheduleError::InvalidLimits {
            field: field.into(),
            reason: format!("must not exceed {ceiling}, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = Limits::default();
        assert_eq!(limits.max_principal, dec!(1_000_000_000));
        assert_eq!(limits.max_contribution, dec!(100_000_000));
        assert_eq!(limits.max_months, 600);
        assert_eq!(limits.max_rate, dec!(200));
        assert_eq!(limits.max_balance_cap, dec!(1_000_000_000_000));
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let limits: Limits = serde_json::from_str(r#"{"max_months": 360}"#).unwrap();
        assert_eq!(limits.max_months, 360);
        assert_eq!(limits.max_principal, DEFAULT_MAX_PRINCIPAL);
    }

    #[test]
    fn test_rejects_non_positive_bound() {
        let err = Limits::new(dec!(0), dec!(1), 12, dec!(10), dec!(1)).unwrap_err();
        match err {
            ScheduleError::InvalidLimits { field, .. } => assert_eq!(field, "max_principal"),
            other => panic!("Expected InvalidLimits, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_months() {
        let err = Limits::new(dec!(1), dec!(1), 0, dec!(10), dec!(1)).unwrap_err();
        match err {
            ScheduleError::InvalidLimits { field, .. } => assert_eq!(field, "max_months"),
            other => panic!("Expected InvalidLimits, got {:?}", other),
        }
    }
}
