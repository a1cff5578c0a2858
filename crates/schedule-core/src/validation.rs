//! Range checks for every caller-supplied parameter.
//!
//! Each check converts one raw value, compares it against [`Limits`] and
//! either returns the typed value or an `InvalidInput` error naming the
//! field, the violated constraint and the offending value. Callers run the
//! checks in parameter order and stop at the first failure.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ScheduleError;
use crate::limits::Limits;
use crate::rounding::{is_finite, to_decimal};
use crate::types::{CompoundingInput, CompoundingTerms, LoanInput, LoanTerms, Money, Percent};
use crate::ScheduleResult;

/// Smallest principal accepted; anything at or below zero is rejected.
pub const MIN_PRINCIPAL: Money = dec!(0.000000001);

pub fn check_principal(limits: &Limits, principal: f64) -> ScheduleResult<Money> {
    check_range("principal", principal, MIN_PRINCIPAL, limits.max_principal)
}

pub fn check_rate(limits: &Limits, annual_rate_percent: f64) -> ScheduleResult<Percent> {
    check_range(
        "annual_rate_percent",
        annual_rate_percent,
        Decimal::ZERO,
        limits.max_rate,
    )
}

pub fn check_months(limits: &Limits, months: f64) -> ScheduleResult<u32> {
    if !is_finite(months) || months.fract() != 0.0 {
        return Err(invalid("months", "must be an integer", months));
    }
    if months < 1.0 || months > f64::from(limits.max_months) {
        return Err(invalid(
            "months",
            &format!("must be in the range [1; {}]", limits.max_months),
            months,
        ));
    }
    Ok(months as u32)
}

pub fn check_initial_amount(limits: &Limits, amount: f64) -> ScheduleResult<Money> {
    check_range("initial_amount", amount, Decimal::ZERO, limits.max_principal)
}

pub fn check_contribution(limits: &Limits, contribution: f64) -> ScheduleResult<Money> {
    check_range(
        "monthly_contribution",
        contribution,
        Decimal::ZERO,
        limits.max_contribution,
    )
}

/// Validate principal, rate and term, in that order.
pub fn validate_loan_input(limits: &Limits, input: &LoanInput) -> ScheduleResult<LoanTerms> {
    let principal = check_principal(limits, input.principal)?;
    let annual_rate_percent = check_rate(limits, input.annual_rate_percent)?;
    let months = check_months(limits, input.months)?;
    Ok(LoanTerms {
        principal,
        annual_rate_percent,
        months,
    })
}

/// Validate initial amount, rate, term and contribution, in that order.
pub fn validate_compounding_input(
    limits: &Limits,
    input: &CompoundingInput,
) -> ScheduleResult<CompoundingTerms> {
    let initial_amount = check_initial_amount(limits, input.initial_amount)?;
    let annual_rate_percent = check_rate(limits, input.annual_rate_percent)?;
    let months = check_months(limits, input.months)?;
    let monthly_contribution = check_contribution(limits, input.monthly_contribution)?;
    Ok(CompoundingTerms {
        initial_amount,
        annual_rate_percent,
        months,
        monthly_contribution,
        contribution_at_beginning: input.contribution_at_beginning,
    })
}

fn check_range(field: &str, value: f64, min: Decimal, max: Decimal) -> ScheduleResult<Decimal> {
    let amount = to_decimal(field, value)?;
    if amount < min {
        let constraint = if min.is_zero() {
            "must be >= 0".to_string()
        } else {
            "must be greater than 0".to_string()
        };
        return Err(invalid(field, &constraint, value));
    }
    if amount > max {
        return Err(invalid(field, &format!("must not exceed {max}"), value));
    }
    Ok(amount)
}

fn invalid(field: &str, constraint: &str, value: f64) -> ScheduleError {
    ScheduleError::InvalidInput {
        field: field.into(),
        constraint: constraint.into(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(err: ScheduleError, expected_field: &str, constraint_fragment: &str) {
        match err {
            ScheduleError::InvalidInput {
                field, constraint, ..
            } => {
                assert_eq!(field, expected_field);
                assert!(
                    constraint.contains(constraint_fragment),
                    "constraint '{constraint}' should mention '{constraint_fragment}'"
                );
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_principal_bounds() {
        let limits = Limits::default();
        assert_eq!(check_principal(&limits, 1000.0).unwrap(), dec!(1000));
        assert_invalid(check_principal(&limits, 0.0).unwrap_err(), "principal", "greater than 0");
        assert_invalid(check_principal(&limits, -5.0).unwrap_err(), "principal", "greater than 0");
        assert_invalid(check_principal(&limits, 2e9).unwrap_err(), "principal", "must not exceed");
        assert_invalid(check_principal(&limits, f64::NAN).unwrap_err(), "principal", "finite");
    }

    #[test]
    fn test_rate_allows_zero() {
        let limits = Limits::default();
        assert_eq!(check_rate(&limits, 0.0).unwrap(), Decimal::ZERO);
        assert_eq!(check_rate(&limits, 200.0).unwrap(), dec!(200));
        assert_invalid(check_rate(&limits, -0.5).unwrap_err(), "annual_rate_percent", ">= 0");
        assert_invalid(
            check_rate(&limits, 200.01).unwrap_err(),
            "annual_rate_percent",
            "must not exceed",
        );
        assert_invalid(
            check_rate(&limits, f64::INFINITY).unwrap_err(),
            "annual_rate_percent",
            "finite",
        );
    }

    #[test]
    fn test_months_bounds() {
        let limits = Limits::default();
        assert_eq!(check_months(&limits, 1.0).unwrap(), 1);
        assert_eq!(check_months(&limits, 600.0).unwrap(), 600);
        assert_invalid(check_months(&limits, 0.0).unwrap_err(), "months", "[1; 600]");
        assert_invalid(check_months(&limits, 601.0).unwrap_err(), "months", "[1; 600]");
        assert_invalid(check_months(&limits, 12.5).unwrap_err(), "months", "integer");
        assert_invalid(check_months(&limits, f64::NAN).unwrap_err(), "months", "integer");
    }

    #[test]
    fn test_initial_amount_and_contribution() {
        let limits = Limits::default();
        assert_eq!(check_initial_amount(&limits, 0.0).unwrap(), Decimal::ZERO);
        assert_invalid(
            check_initial_amount(&limits, -1.0).unwrap_err(),
            "initial_amount",
            ">= 0",
        );
        assert_eq!(check_contribution(&limits, 0.0).unwrap(), Decimal::ZERO);
        assert_invalid(
            check_contribution(&limits, 1e8 + 1.0).unwrap_err(),
            "monthly_contribution",
            "must not exceed",
        );
    }

    #[test]
    fn test_first_failing_check_wins() {
        let limits = Limits::default();
        let input = LoanInput {
            principal: -1.0,
            annual_rate_percent: -1.0,
            months: 0.0,
        };
        assert_invalid(
            validate_loan_input(&limits, &input).unwrap_err(),
            "principal",
            "greater than 0",
        );
    }

    #[test]
    fn test_error_message_names_parameter_and_value() {
        let limits = Limits::default();
        let err = check_months(&limits, 700.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("months"));
        assert!(msg.contains("700"));
    }
}
