//! Differential (equal principal) amortization.

use rust_decimal::Decimal;

use super::{
    check_remaining, reported_remaining, LoanPeriod, LoanResult, LoanSummary, PaymentProfile,
};
use crate::rounding::round2;
use crate::types::{monthly_rate, CalculationResult, LoanTerms};
use crate::ScheduleResult;

/// Build the differential schedule: a flat principal share every month plus
/// interest on the balance still outstanding, so payments fall over time.
pub fn differential_schedule(terms: &LoanTerms) -> ScheduleResult<LoanResult> {
    let principal = terms.principal;
    let months = terms.months;
    let r = monthly_rate(terms.annual_rate_percent);
    let principal_share = principal / Decimal::from(months);

    let mut remaining = principal;
    let mut cumulative_interest = Decimal::ZERO;
    let mut cumulative_principal = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut first_payment = Decimal::ZERO;
    let mut last_payment = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let raw_interest = remaining * r;
        let raw_principal = if month < months && principal_share < remaining {
            principal_share
        } else {
            remaining
        };
        let raw_payment = raw_principal + raw_interest;

        let interest = round2(raw_interest);
        let principal_component = round2(raw_principal);
        let payment = round2(raw_payment);

        remaining = round2(remaining - principal_component);
        cumulative_interest = round2(cumulative_interest + interest);
        cumulative_principal = round2(cumulative_principal + principal_component);
        total_paid = round2(total_paid + payment);

        if month == 1 {
            first_payment = payment;
        }
        if month == months {
            last_payment = payment;
        }

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
        payments: PaymentProfile::Differential {
            first_month_payment: first_payment,
            last_month_payment: last_payment,
        },
        total_paid,
        total_interest: cumulative_interest,
    };

    Ok(CalculationResult { summary, schedule })
}
