//! Deposit compounding and the investment metrics built on it.

pub mod deposit;
pub mod investment;

use serde::{Deserialize, Serialize};

use crate::types::{CalculationResult, Money, Percent};

/// One month of a compounding schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositPeriod {
    pub month: u32,
    pub starting_balance: Money,
    pub contribution: Money,
    pub interest_earned: Money,
    pub ending_balance: Money,
    pub cumulative_contributions: Money,
    pub cumulative_interest: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositSummary {
    pub initial_amount: Money,
    pub annual_rate_percent: Percent,
    pub months: u32,
    pub monthly_contribution: Money,
    pub contribution_at_beginning: bool,
    pub final_balance: Money,
    pub total_contributions: Money,
    pub total_interest: Money,
}

pub type DepositResult = CalculationResult<DepositSummary, DepositPeriod>;
