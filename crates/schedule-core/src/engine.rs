//! Validate-then-compute entry points for the five named operations.
//!
//! [`Engine`] owns the [`Limits`] every request is checked against and the
//! observer that hears about each outcome. It holds no other state: two calls
//! with the same inputs return identical results, and an engine can be shared
//! across threads whenever its observer can.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ScheduleError;
use crate::limits::Limits;
use crate::loans::annuity::annuity_schedule;
use crate::loans::compare::{compare_loans, ComparisonResult};
use crate::loans::differential::differential_schedule;
use crate::loans::LoanResult;
use crate::observer::{CalculationObserver, NoopObserver};
use crate::savings::deposit::compound_schedule;
use crate::savings::investment::{investment_calculator, InvestmentResult};
use crate::savings::DepositResult;
use crate::types::{CompoundingInput, LoanInput};
use crate::validation::{validate_compounding_input, validate_loan_input};
use crate::ScheduleResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    LoanScheduleAnnuity,
    LoanScheduleDifferential,
    DepositScheduleCompound,
    CompareLoanSchedules,
    InvestmentCalculator,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::LoanScheduleAnnuity,
        Operation::LoanScheduleDifferential,
        Operation::DepositScheduleCompound,
        Operation::CompareLoanSchedules,
        Operation::InvestmentCalculator,
    ];

    /// Method name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Operation::LoanScheduleAnnuity => "loan_schedule_annuity",
            Operation::LoanScheduleDifferential => "loan_schedule_differential",
            Operation::DepositScheduleCompound => "deposit_schedule_compound",
            Operation::CompareLoanSchedules => "compare_loan_schedules",
            Operation::InvestmentCalculator => "investment_calculator",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| ScheduleError::MalformedParameter {
                field: "method".into(),
                reason: format!("unknown method '{s}'"),
            })
    }
}

pub struct Engine<O = NoopObserver> {
    limits: Limits,
    observer: O,
}

impl Engine<NoopObserver> {
    /// Engine with no observer. Fails if the limits themselves are unusable.
    pub fn new(limits: Limits) -> ScheduleResult<Self> {
        Engine::with_observer(limits, NoopObserver)
    }
}

impl Default for Engine<NoopObserver> {
    fn default() -> Self {
        Engine {
            limits: Limits::default(),
            observer: NoopObserver,
        }
    }
}

impl<O: CalculationObserver> Engine<O> {
    pub fn with_observer(limits: Limits, observer: O) -> ScheduleResult<Self> {
        limits.validate()?;
        Ok(Engine { limits, observer })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn loan_schedule_annuity(&self, input: &LoanInput) -> ScheduleResult<LoanResult> {
        let outcome =
            validate_loan_input(&self.limits, input).and_then(|terms| annuity_schedule(&terms));
        self.report(Operation::LoanScheduleAnnuity, outcome)
    }

    pub fn loan_schedule_differential(&self, input: &LoanInput) -> ScheduleResult<LoanResult> {
        let outcome = validate_loan_input(&self.limits, input)
            .and_then(|terms| differential_schedule(&terms));
        self.report(Operation::LoanScheduleDifferential, outcome)
    }

    pub fn deposit_schedule_compound(
        &self,
        input: &CompoundingInput,
    ) -> ScheduleResult<DepositResult> {
        let outcome = validate_compounding_input(&self.limits, input)
            .and_then(|terms| compound_schedule(&terms, &self.limits));
        self.report(Operation::DepositScheduleCompound, outcome)
    }

    pub fn compare_loan_schedules(&self, input: &LoanInput) -> ScheduleResult<ComparisonResult> {
        let outcome =
            validate_loan_input(&self.limits, input).and_then(|terms| compare_loans(&terms));
        self.report(Operation::CompareLoanSchedules, outcome)
    }

    pub fn investment_calculator(
        &self,
        input: &CompoundingInput,
    ) -> ScheduleResult<InvestmentResult> {
        let outcome = validate_compounding_input(&self.limits, input)
            .and_then(|terms| investment_calculator(&terms, &self.limits));
        self.report(Operation::InvestmentCalculator, outcome)
    }

    /// Dispatch a method name with JSON params and return the JSON result.
    ///
    /// Unknown methods and params that do not decode are reported as
    /// `MalformedParameter` before any validation runs.
    pub fn call(&self, method: &str, params: Value) -> ScheduleResult<Value> {
        let operation: Operation = method.parse()?;
        match operation {
            Operation::LoanScheduleAnnuity => {
                let input = self.decode(operation, params)?;
                to_json(self.loan_schedule_annuity(&input)?)
            }
            Operation::LoanScheduleDifferential => {
                let input = self.decode(operation, params)?;
                to_json(self.loan_schedule_differential(&input)?)
            }
            Operation::DepositScheduleCompound => {
                let input = self.decode(operation, params)?;
                to_json(self.deposit_schedule_compound(&input)?)
            }
            Operation::CompareLoanSchedules => {
                let input = self.decode(operation, params)?;
                to_json(self.compare_loan_schedules(&input)?)
            }
            Operation::InvestmentCalculator => {
                let input = self.decode(operation, params)?;
                to_json(self.investment_calculator(&input)?)
            }
        }
    }

    fn decode<T: DeserializeOwned>(
        &self,
        operation: Operation,
        params: Value,
    ) -> ScheduleResult<T> {
        let decoded =
            serde_json::from_value(params).map_err(|e| ScheduleError::MalformedParameter {
                field: "params".into(),
                reason: e.to_string(),
            });
        if let Err(ref e) = decoded {
            self.observer.on_failure(operation, e);
        }
        decoded
    }

    fn report<T>(&self, operation: Operation, outcome: ScheduleResult<T>) -> ScheduleResult<T> {
        match &outcome {
            Ok(_) => self.observer.on_success(operation),
            Err(e) => self.observer.on_failure(operation, e),
        }
        outcome
    }
}

fn to_json<T: Serialize>(value: T) -> ScheduleResult<Value> {
    Ok(serde_json::to_value(value)?)
}
