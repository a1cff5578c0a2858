use rust_decimal::Decimal;

use super::{DepositPeriod, DepositResult, DepositSummary};
use crate::error::ScheduleError;
use crate::limits::Limits;
use crate::rounding::round2;
use crate::types::{monthly_rate, CalculationResult, CompoundingTerms};
use crate::ScheduleResult;

/// Compound a balance monthly, adding a fixed contribution either before or
/// after each month's interest accrues.
///
/// Fails with [`ScheduleError::BalanceOverflow`] as soon as the balance
/// exceeds `limits.max_balance_cap`.
pub fn compound_schedule(
    terms: &CompoundingTerms,
    limits: &Limits,
) -> ScheduleResult<DepositResult> {
    let r = monthly_rate(terms.annual_rate_percent);
    let contribution = terms.monthly_contribution;
    let cap = limits.max_balance_cap;

    let mut balance = terms.initial_amount;
    let mut cumulative_interest = Decimal::ZERO;
    let mut cumulative_contributions = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(terms.months as usize);

    for month in 1..=terms.months {
        let starting = balance;

        if terms.contribution_at_beginning {
            balance = round2(balance + contribution);
            cumulative_contributions = round2(cumulative_contributions + contribution);
        }

        let interest = round2(balance * r);
        balance = round2(balance + interest);
        cumulative_interest = round2(cumulative_interest + interest);

        if !terms.contribution_at_beginning {
            balance = round2(balance + contribution);
            cumulative_contributions = round2(cumulative_contributions + contribution);
        }

        if balance > cap {
            return Err(ScheduleError::BalanceOverflow {
                month,
                balance,
                cap,
            });
        }

        schedule.push(DepositPeriod {
            month,
            starting_balance: round2(starting),
            contribution: round2(contribution),
            interest_earned: interest,
            ending_balance: balance,
            cumulative_contributions,
            cumulative_interest,
        });
    }

    let summary = DepositSummary {
        initial_amount: round2(terms.initial_amount),
        annual_rate_percent: round2(terms.annual_rate_percent),
        months: terms.months,
        monthly_contribution: round2(contribution),
        contribution_at_beginning: terms.contribution_at_beginning,
        final_balance: round2(balance),
        total_contributions: cumulative_contributions,
        total_interest: cumulative_interest,
    };

    Ok(CalculationResult { summary, schedule })
}
