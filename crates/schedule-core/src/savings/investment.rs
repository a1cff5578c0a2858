//! Investment growth metrics layered over a compounding schedule.
//!
//! The schedule itself comes from [`compound_schedule`]; this module only
//! derives ROI, annualized return (CAGR), capital gain and profit share from
//! its summary. Every ratio short-circuits to zero when its denominator is
//! zero instead of producing NaN-like values.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::deposit::compound_schedule;
use super::{DepositPeriod, DepositSummary};
use crate::error::ScheduleError;
use crate::limits::Limits;
use crate::rounding::round2;
use crate::types::{years_for, CompoundingTerms, Money, Percent};
use crate::ScheduleResult;

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Deposit summary extended with return metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    #[serde(flatten)]
    pub deposit: DepositSummary,
    pub roi_percent: Percent,
    pub annualized_return_percent: Percent,
    pub capital_gain: Money,
    pub total_invested: Money,
}

/// Stand-alone view of the growth figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub roi_percent: Percent,
    pub annualized_return_percent: Percent,
    pub capital_gain: Money,
    /// Share of the final value that is earned interest.
    pub profit_percent: Percent,
    pub total_invested: Money,
    pub final_value: Money,
    pub years: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    pub summary: InvestmentSummary,
    pub schedule: Vec<DepositPeriod>,
    pub growth_metrics: GrowthMetrics,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Compound the investment and attach its growth metrics.
pub fn investment_calculator(
    terms: &CompoundingTerms,
    limits: &Limits,
) -> ScheduleResult<InvestmentResult> {
    let deposit = compound_schedule(terms, limits)?;
    let growth_metrics = growth_metrics(&deposit.summary)?;

    let summary = InvestmentSummary {
        roi_percent: growth_metrics.roi_percent,
        annualized_return_percent: growth_metrics.annualized_return_percent,
        capital_gain: growth_metrics.capital_gain,
        total_invested: growth_metrics.total_invested,
        deposit: deposit.summary,
    };

    Ok(InvestmentResult {
        summary,
        schedule: deposit.schedule,
        growth_metrics,
    })
}

/// Derive return metrics from a finished deposit summary.
pub fn growth_metrics(summary: &DepositSummary) -> ScheduleResult<GrowthMetrics> {
    let final_balance = summary.final_balance;
    let total_invested = round2(summary.initial_amount + summary.total_contributions);
    let years = years_for(summary.months);

    let roi_percent = if total_invested > Decimal::ZERO {
        round2((final_balance - total_invested) / total_invested * HUNDRED)
    } else {
        Decimal::ZERO
    };

    let annualized_return_percent = annualized_return(final_balance, total_invested, years)?;

    let profit_percent = if final_balance > Decimal::ZERO {
        round2(summary.total_interest / final_balance * HUNDRED)
    } else {
        Decimal::ZERO
    };

    Ok(GrowthMetrics {
        roi_percent,
        annualized_return_percent,
        capital_gain: round2(final_balance - total_invested),
        profit_percent,
        total_invested,
        final_value: final_balance,
        years: round2(years),
    })
}

/// CAGR in percent: `((final / invested)^(1/years) - 1) * 100`.
fn annualized_return(
    final_balance: Money,
    total_invested: Money,
    years: Decimal,
) -> ScheduleResult<Percent> {
    if total_invested <= Decimal::ZERO || years <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let growth = final_balance / total_invested;
    if growth <= Decimal::ZERO {
        return Ok(-HUNDRED);
    }
    let annual_factor = growth
        .checked_powd(Decimal::ONE / years)
        .ok_or_else(|| {
            ScheduleError::NumericInvariant(format!(
                "annualized return is not representable (growth factor {growth} over {years} years)"
            ))
        })?;
    Ok(round2((annual_factor - Decimal::ONE) * HUNDRED))
}
