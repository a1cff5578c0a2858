//! Loan amortization: annuity and differential schedules, and their comparison.

pub mod annuity;
pub mod compare;
pub mod differential;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::types::{CalculationResult, Money, Percent};
use crate::ScheduleResult;

/// Rounding drift tolerated on the remaining balance before it counts as a numeric fault.
const NEGATIVE_REMAINDER_TOLERANCE: Money = dec!(-0.01);

/// One month of a loan schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPeriod {
    pub month: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal_component: Money,
    pub remaining_principal: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// How the payment is quoted for each loan type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "loan_type", rename_all = "snake_case")]
pub enum PaymentProfile {
    /// Level payment every month.
    Annuity { monthly_payment: Money },
    /// Payment shrinks as interest on the falling balance shrinks.
    Differential {
        first_month_payment: Money,
        last_month_payment: Money,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub months: u32,
    #[serde(flatten)]
    pub payments: PaymentProfile,
    pub total_paid: Money,
    pub total_interest: Money,
}

impl LoanSummary {
    /// Level payment, for annuity summaries.
    pub fn monthly_payment(&self) -> Option<Money> {
        match self.payments {
            PaymentProfile::Annuity { monthly_payment } => Some(monthly_payment),
            PaymentProfile::Differential { .. } => None,
        }
    }

    /// First and last payment, for differential summaries.
    pub fn payment_range(&self) -> Option<(Money, Money)> {
        match self.payments {
            PaymentProfile::Annuity { .. } => None,
            PaymentProfile::Differential {
                first_month_payment,
                last_month_payment,
            } => Some((first_month_payment, last_month_payment)),
        }
    }
}

pub type LoanResult = CalculationResult<LoanSummary, LoanPeriod>;

/// Fail when rounding has pushed the remaining balance meaningfully below zero.
fn check_remaining(remaining: Money, month: u32) -> ScheduleResult<()> {
    if remaining < NEGATIVE_REMAINDER_TOLERANCE {
        return Err(ScheduleError::NumericInvariant(format!(
            "remaining principal became negative ({remaining}) in month {month}"
        )));
    }
    Ok(())
}

/// Remaining principal as reported: never below zero.
fn reported_remaining(remaining: Money) -> Money {
    remaining.max(Decimal::ZERO)
}
