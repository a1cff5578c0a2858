//! Annuity (level payment) amortization.
//!
//! The payment `A = P·r / (1 − (1+r)^−n)` is fixed once; each month splits it
//! into interest on the outstanding balance and principal. The final month
//! repays the exact remaining balance so the loan closes at zero whatever
//! rounding drift has built up.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use super::{
    check_remaining, reported_remaining, LoanPeriod, LoanResult, LoanSummary, PaymentProfile,
};
use crate::error::ScheduleError;
use crate::rounding::round2;
use crate::types::{monthly_rate, CalculationResult, LoanTerms, Money};
use crate::ScheduleResult;

/// Build the month-by-month annuity schedule for validated terms.
pub fn annuity_schedule(terms: &LoanTerms) -> ScheduleResult<LoanResult> {
    let principal = terms.principal;
    let months = terms.months;
    let r = monthly_rate(terms.annual_rate_percent);

    let monthly_payment = level_payment(principal, r, months)?;

    let mut remaining = principal;
    let mut cumulative_interest = Decimal::ZERO;
    let mut cumulative_principal = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let raw_interest = remaining * r;
        // The final month, or any month whose share would overpay, settles the balance.
        let settles = month == months || monthly_payment - raw_interest >= remaining;
        let (raw_principal, raw_payment) = if settles {
            (remaining, remaining + raw_interest)
        } else {
            (monthly_payment - raw_interest, monthly_payment)
        };

        // Components are rounded before they touch any running total.
        let interest = round2(raw_interest);
        let principal_component = round2(raw_principal);
        let payment = round2(raw_payment);

        remaining = round2(remaining - principal_component);
        cumulative_interest = round2(cumulative_interest + interest);
        cumulative_principal = round2(cumulative_principal + principal_component);
        total_paid = round2(total_paid + payment);

        check_remaining(remaining, month)?;

        schedule.push(LoanPeriod {
            month,
            payment,
            interest,
            principal_component,
            remaining_principal: reported_remaining(remaining),
            cumulative_interest,
            cumulative_principal,
        });
    }

    let summary = LoanSummary {
        principal: round2(principal),
        annual_rate_percent: round2(terms.annual_rate_percent),
        months,
        payments: PaymentProfile::Annuity {
            monthly_payment: round2(monthly_payment),
        },
        total_paid,
        total_interest: cumulative_interest,
    };

    Ok(CalculationResult { summary, schedule })
}

/// Unrounded level payment. Zero rate degenerates to straight division.
pub fn level_payment(
    principal: Money,
    monthly_rate: Decimal,
    months: u32,
) -> ScheduleResult<Money> {
    let n = Decimal::from(months);
    if monthly_rate.is_zero() {
        return Ok(principal / n);
    }

    // (1+r)^-n computed as (1/(1+r))^n: the base is below one, so long terms
    // shrink towards zero instead of overflowing.
    let discount = (Decimal::ONE / (Decimal::ONE + monthly_rate))
        .checked_powi(i64::from(months))
        .ok_or_else(|| {
            ScheduleError::NumericInvariant(format!(
                "annuity discount factor is not representable for {months} months"
            ))
        })?;
    let denominator = Decimal::ONE - discount;
    if denominator <= Decimal::ZERO {
        return Err(ScheduleError::NumericInvariant(
            "annuity factor collapsed to zero".into(),
        ));
    }

    Ok(principal * monthly_rate / denominator)
}
