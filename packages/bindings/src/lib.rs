use napi::Result as NapiResult;
use napi_derive::napi;

use finance_schedule_core::{CompoundingInput, Engine, Limits, LoanInput, ScheduleError};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Engine errors carry their kind so JS callers can branch on it.
fn to_engine_error(e: ScheduleError) -> napi::Error {
    napi::Error::from_reason(format!("[{}] {}", e.kind().as_str(), e))
}

fn parse<T: serde::de::DeserializeOwned>(input_json: &str) -> NapiResult<T> {
    serde_json::from_str(input_json).map_err(|e| {
        to_engine_error(ScheduleError::MalformedParameter {
            field: "params".into(),
            reason: e.to_string(),
        })
    })
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_schedule_annuity(input_json: String) -> NapiResult<String> {
    let input: LoanInput = parse(&input_json)?;
    let output = Engine::default()
        .loan_schedule_annuity(&input)
        .map_err(to_engine_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn loan_schedule_differential(input_json: String) -> NapiResult<String> {
    let input: LoanInput = parse(&input_json)?;
    let output = Engine::default()
        .loan_schedule_differential(&input)
        .map_err(to_engine_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_loan_schedules(input_json: String) -> NapiResult<String> {
    let input: LoanInput = parse(&input_json)?;
    let output = Engine::default()
        .compare_loan_schedules(&input)
        .map_err(to_engine_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Savings
// ---------------------------------------------------------------------------

#[napi]
pub fn deposit_schedule_compound(input_json: String) -> NapiResult<String> {
    let input: CompoundingInput = parse(&input_json)?;
    let output = Engine::default()
        .deposit_schedule_compound(&input)
        .map_err(to_engine_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn investment_calculator(input_json: String) -> NapiResult<String> {
    let input: CompoundingInput = parse(&input_json)?;
    let output = Engine::default()
        .investment_calculator(&input)
        .map_err(to_engine_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[napi]
pub fn call(method: String, params_json: String) -> NapiResult<String> {
    let params = parse(&params_json)?;
    let output = Engine::default()
        .call(&method, params)
        .map_err(to_engine_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Same as `call`, against caller-supplied limits. Missing limit fields
/// keep their defaults.
#[napi]
pub fn call_with_limits(
    method: String,
    params_json: String,
    limits_json: String,
) -> NapiResult<String> {
    let limits: Limits = serde_json::from_str(&limits_json).map_err(|e| {
        to_engine_error(ScheduleError::InvalidLimits {
            field: "limits".into(),
            reason: e.to_string(),
        })
    })?;
    let engine = Engine::new(limits).map_err(to_engine_error)?;
    let params = parse(&params_json)?;
    let output = engine.call(&method, params).map_err(to_engine_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn default_limits() -> NapiResult<String> {
    serde_json::to_string(&Limits::default()).map_err(to_napi_error)
}
