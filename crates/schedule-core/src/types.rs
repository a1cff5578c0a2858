use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage past the input boundary.
pub type Money = Decimal;

/// Annual rates expressed as percentages (12 = 12% p.a.), as callers supply them.
pub type Percent = Decimal;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Raw loan parameters as they arrive from a caller (JSON numbers).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    /// Term in months. Must be integer-valued.
    pub months: f64,
}

/// Raw deposit / investment parameters as they arrive from a caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundingInput {
    pub initial_amount: f64,
    pub annual_rate_percent: f64,
    pub months: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    /// Contribution lands before the month's interest accrues when true.
    #[serde(default)]
    pub contribution_at_beginning: bool,
}

/// Loan parameters that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub months: u32,
}

/// Compounding parameters that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundingTerms {
    pub initial_amount: Money,
    pub annual_rate_percent: Percent,
    pub months: u32,
    pub monthly_contribution: Money,
    pub contribution_at_beginning: bool,
}

/// A summary paired with its month-by-month schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult<S, P> {
    pub summary: S,
    pub schedule: Vec<P>,
}

/// Monthly rate as a decimal fraction: 12 (% p.a.) -> 0.01.
pub fn monthly_rate(annual_rate_percent: Percent) -> Decimal {
    annual_rate_percent / dec!(100) / MONTHS_PER_YEAR
}

/// Elapsed years for a term in months.
pub fn years_for(months: u32) -> Decimal {
    Decimal::from(months) / MONTHS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate_from_percent() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_compounding_input_defaults() {
        let input: CompoundingInput = serde_json::from_str(
            r#"{"initial_amount": 1000, "annual_rate_percent": 5, "months": 12}"#,
        )
        .unwrap();
        assert_eq!(input.monthly_contribution, 0.0);
        assert!(!input.contribution_at_beginning);
    }
}
