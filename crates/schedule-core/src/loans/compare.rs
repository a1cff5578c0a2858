//! Side-by-side comparison of annuity and differential repayment.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::annuity::annuity_schedule;
use super::differential::differential_schedule;
use super::LoanResult;
use crate::rounding::round2;
use crate::types::{LoanTerms, Money, Percent};
use crate::ScheduleResult;

// ---------------------------------------------------------------------------
// Fixed wording
// ---------------------------------------------------------------------------

const ANNUITY_ADVANTAGES: [&str; 3] = [
    "Fixed monthly payment makes budgeting straightforward",
    "Lower payments in the early months than a differential loan",
    "Simpler to manage alongside other personal finances",
];

const DIFFERENTIAL_ADVANTAGES: [&str; 3] = [
    "Less interest paid over the life of the loan",
    "Principal is paid down faster",
    "Lower total amount repaid",
];

const RECOMMEND_DIFFERENTIAL: &str = "The differential loan is cheaper in total repayments. \
     Keep in mind that its first payments are higher than under the annuity schedule.";
const RECOMMEND_ANNUITY: &str = "The annuity loan is cheaper in total repayments. \
     Its payment stays the same every month, which makes budgeting easy.";
const RECOMMEND_EQUAL: &str = "Both loan types cost the same in total repayments.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheaperOption {
    Annuity,
    Differential,
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuityOverview {
    pub total_paid: Money,
    pub total_interest: Money,
    pub monthly_payment: Money,
    /// Total interest as a percentage of principal.
    pub overpayment_percent: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialOverview {
    pub total_paid: Money,
    pub total_interest: Money,
    pub first_month_payment: Money,
    pub last_month_payment: Money,
    pub overpayment_percent: Percent,
}

/// Annuity minus differential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDifference {
    pub total_paid_diff: Money,
    pub interest_diff: Money,
    pub cheaper_type: CheaperOption,
    pub savings: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanComparison {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub months: u32,
    pub annuity: AnnuityOverview,
    pub differential: DifferentialOverview,
    pub difference: LoanDifference,
    pub annuity_advantages: Vec<String>,
    pub differential_advantages: Vec<String>,
    pub recommendation: String,
}

/// The comparison together with both full schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub comparison: LoanComparison,
    pub annuity: LoanResult,
    pub differential: LoanResult,
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Run both schedules on the same terms and report which costs less.
pub fn compare_loans(terms: &LoanTerms) -> ScheduleResult<ComparisonResult> {
    let annuity = annuity_schedule(terms)?;
    let differential = differential_schedule(terms)?;

    let a = &annuity.summary;
    let d = &differential.summary;

    let total_paid_diff = round2(a.total_paid - d.total_paid);
    let interest_diff = round2(a.total_interest - d.total_interest);

    let (cheaper_type, savings, recommendation) = classify(total_paid_diff);

    let monthly_payment = a.monthly_payment().unwrap_or(Decimal::ZERO);
    let (first_month_payment, last_month_payment) =
        d.payment_range().unwrap_or((Decimal::ZERO, Decimal::ZERO));

    let comparison = LoanComparison {
        principal: round2(terms.principal),
        annual_rate_percent: round2(terms.annual_rate_percent),
        months: terms.months,
        annuity: AnnuityOverview {
            total_paid: a.total_paid,
            total_interest: a.total_interest,
            monthly_payment,
            overpayment_percent: overpayment_percent(a.total_interest, terms.principal),
        },
        differential: DifferentialOverview {
            total_paid: d.total_paid,
            total_interest: d.total_interest,
            first_month_payment,
            last_month_payment,
            overpayment_percent: overpayment_percent(d.total_interest, terms.principal),
        },
        difference: LoanDifference {
            total_paid_diff,
            interest_diff,
            cheaper_type,
            savings,
        },
        annuity_advantages: ANNUITY_ADVANTAGES.iter().map(|s| s.to_string()).collect(),
        differential_advantages: DIFFERENTIAL_ADVANTAGES
            .iter()
            .map(|s| s.to_string())
            .collect(),
        recommendation: recommendation.to_string(),
    };

    Ok(ComparisonResult {
        comparison,
        annuity,
        differential,
    })
}

fn classify(total_paid_diff: Money) -> (CheaperOption, Money, &'static str) {
    if total_paid_diff > Decimal::ZERO {
        (CheaperOption::Differential, total_paid_diff, RECOMMEND_DIFFERENTIAL)
    } else if total_paid_diff < Decimal::ZERO {
        (CheaperOption::Annuity, -total_paid_diff, RECOMMEND_ANNUITY)
    } else {
        (CheaperOption::Equal, Decimal::ZERO, RECOMMEND_EQUAL)
    }
}

fn overpayment_percent(total_interest: Money, principal: Money) -> Percent {
    if principal.is_zero() {
        return Decimal::ZERO;
    }
    round2(total_interest / principal * dec!(100))
}
