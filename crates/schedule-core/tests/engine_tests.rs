use std::sync::Arc;

use finance_schedule_core::{
    CompoundingInput, CountingObserver, Engine, ErrorKind, Limits, LoanInput, Operation,
    ScheduleError,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Decimal fields serialize as strings; read one back by JSON pointer.
fn decimal_at(value: &Value, pointer: &str) -> Decimal {
    let raw = value
        .pointer(pointer)
        .unwrap_or_else(|| panic!("missing {pointer} in {value}"));
    match raw {
        Value::String(s) => s.parse().unwrap(),
        Value::Number(n) => n.to_string().parse().unwrap(),
        other => panic!("Expected decimal at {pointer}, got {other}"),
    }
}

fn loan_params(principal: f64, rate: f64, months: f64) -> Value {
    json!({
        "principal": principal,
        "annual_rate_percent": rate,
        "months": months,
    })
}

fn assert_invalid(err: ScheduleError, expected_field: &str) {
    match err {
        ScheduleError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

// ===========================================================================
// Dispatch
// ===========================================================================

#[test]
fn test_call_annuity() {
    let engine = Engine::default();
    let out = engine
        .call("loan_schedule_annuity", loan_params(1_000_000.0, 12.0, 12.0))
        .unwrap();

    assert_eq!(out["summary"]["loan_type"], "annuity");
    assert_eq!(decimal_at(&out, "/summary/monthly_payment"), dec!(88848.79));
    assert_eq!(decimal_at(&out, "/summary/total_paid"), dec!(1066185.46));
    assert_eq!(decimal_at(&out, "/summary/total_interest"), dec!(66185.45));
    assert_eq!(out["schedule"].as_array().unwrap().len(), 12);
    assert_eq!(decimal_at(&out, "/schedule/11/remaining_principal"), Decimal::ZERO);
}

#[test]
fn test_call_differential() {
    let engine = Engine::default();
    let out = engine
        .call("loan_schedule_differential", loan_params(1_000_000.0, 12.0, 12.0))
        .unwrap();

    assert_eq!(out["summary"]["loan_type"], "differential");
    assert_eq!(decimal_at(&out, "/summary/first_month_payment"), dec!(93333.33));
    assert_eq!(decimal_at(&out, "/summary/last_month_payment"), dec!(84166.70));
    assert!(out["summary"].get("monthly_payment").is_none());
}

#[test]
fn test_call_deposit_with_defaults() {
    let engine = Engine::default();
    let out = engine
        .call(
            "deposit_schedule_compound",
            json!({"initial_amount": 10_000, "annual_rate_percent": 12, "months": 12}),
        )
        .unwrap();

    assert_eq!(decimal_at(&out, "/summary/final_balance"), dec!(11268.25));
    assert_eq!(decimal_at(&out, "/summary/monthly_contribution"), Decimal::ZERO);
    assert_eq!(out["summary"]["contribution_at_beginning"], false);
}

#[test]
fn test_call_deposit_contribution_at_beginning() {
    let engine = Engine::default();
    let out = engine
        .call(
            "deposit_schedule_compound",
            json!({
                "initial_amount": 10_000,
                "annual_rate_percent": 12,
                "months": 12,
                "monthly_contribution": 1_000,
                "contribution_at_beginning": true,
            }),
        )
        .unwrap();
    assert_eq!(decimal_at(&out, "/summary/final_balance"), dec!(24077.57));
}

#[test]
fn test_call_compare() {
    let engine = Engine::default();
    let out = engine
        .call("compare_loan_schedules", loan_params(1_000_000.0, 12.0, 12.0))
        .unwrap();

    let comparison = &out["comparison"];
    assert_eq!(comparison["difference"]["cheaper_type"], "differential");
    assert_eq!(
        decimal_at(&out, "/comparison/difference/total_paid_diff"),
        dec!(1185.43)
    );
    assert!(comparison["recommendation"].as_str().is_some());
    assert_eq!(out["annuity"]["schedule"].as_array().unwrap().len(), 12);
    assert_eq!(out["differential"]["schedule"].as_array().unwrap().len(), 12);
}

#[test]
fn test_call_investment() {
    let engine = Engine::default();
    let out = engine
        .call(
            "investment_calculator",
            json!({
                "initial_amount": 100_000,
                "annual_rate_percent": 6,
                "months": 24,
                "monthly_contribution": 500,
            }),
        )
        .unwrap();

    assert_eq!(decimal_at(&out, "/summary/final_balance"), dec!(125431.98));
    assert_eq!(decimal_at(&out, "/summary/roi_percent"), dec!(11.99));
    assert_eq!(decimal_at(&out, "/growth_metrics/profit_percent"), dec!(10.71));
    assert_eq!(out["schedule"].as_array().unwrap().len(), 24);
}

#[test]
fn test_every_operation_reachable_by_name() {
    let engine = Engine::default();
    let loan = loan_params(50_000.0, 7.0, 24.0);
    let savings = json!({"initial_amount": 50_000, "annual_rate_percent": 7, "months": 24});
    for op in Operation::ALL {
        let params = match op {
            Operation::DepositScheduleCompound | Operation::InvestmentCalculator => {
                savings.clone()
            }
            _ => loan.clone(),
        };
        assert!(engine.call(op.name(), params).is_ok(), "{op} failed");
    }
}

// ===========================================================================
// Validation through the engine
// ===========================================================================

#[test]
fn test_validation_names_failing_field() {
    let engine = Engine::default();
    let cases = [
        (loan_params(0.0, 10.0, 12.0), "principal"),
        (loan_params(1_000.0, -1.0, 12.0), "annual_rate_percent"),
        (loan_params(1_000.0, 201.0, 12.0), "annual_rate_percent"),
        (loan_params(1_000.0, 10.0, 0.0), "months"),
        (loan_params(1_000.0, 10.0, 601.0), "months"),
    ];
    for (params, field) in cases {
        let err = engine.call("loan_schedule_annuity", params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_invalid(err, field);
    }

    let err = engine
        .call(
            "investment_calculator",
            json!({
                "initial_amount": 1_000,
                "annual_rate_percent": 5,
                "months": 12,
                "monthly_contribution": -10,
            }),
        )
        .unwrap_err();
    assert_invalid(err, "monthly_contribution");
}

#[test]
fn test_integer_valued_months_only() {
    let engine = Engine::default();
    assert!(engine
        .call("loan_schedule_annuity", loan_params(1_000.0, 5.0, 12.0))
        .is_ok());
    let err = engine
        .call("loan_schedule_annuity", loan_params(1_000.0, 5.0, 12.5))
        .unwrap_err();
    assert_invalid(err, "months");
}

#[test]
fn test_rate_zero_valid_everywhere() {
    let engine = Engine::default();
    let loan = LoanInput {
        principal: 12_000.0,
        annual_rate_percent: 0.0,
        months: 12.0,
    };
    let savings = CompoundingInput {
        initial_amount: 12_000.0,
        annual_rate_percent: 0.0,
        months: 12.0,
        monthly_contribution: 100.0,
        contribution_at_beginning: false,
    };
    assert_eq!(
        engine.loan_schedule_annuity(&loan).unwrap().summary.total_interest,
        Decimal::ZERO
    );
    assert_eq!(
        engine.loan_schedule_differential(&loan).unwrap().summary.total_interest,
        Decimal::ZERO
    );
    assert_eq!(
        engine.compare_loan_schedules(&loan).unwrap().comparison.difference.cheaper_type,
        finance_schedule_core::loans::compare::CheaperOption::Equal
    );
    assert_eq!(
        engine.deposit_schedule_compound(&savings).unwrap().summary.final_balance,
        dec!(13_200)
    );
    assert_eq!(
        engine.investment_calculator(&savings).unwrap().growth_metrics.roi_percent,
        Decimal::ZERO
    );
}

#[test]
fn test_custom_limits_apply() {
    let limits = Limits {
        max_principal: dec!(10_000),
        max_months: 24,
        ..Limits::default()
    };
    let engine = Engine::new(limits).unwrap();
    assert_invalid(
        engine
            .call("loan_schedule_annuity", loan_params(10_000.01, 5.0, 12.0))
            .unwrap_err(),
        "principal",
    );
    assert_invalid(
        engine
            .call("compare_loan_schedules", loan_params(5_000.0, 5.0, 36.0))
            .unwrap_err(),
        "months",
    );
    assert!(engine
        .call("loan_schedule_differential", loan_params(10_000.0, 5.0, 24.0))
        .is_ok());
}

#[test]
fn test_limits_deserialize_with_defaults() {
    let limits: Limits = serde_json::from_value(json!({"max_months": 120})).unwrap();
    assert_eq!(limits.max_months, 120);
    assert_eq!(limits.max_rate, Limits::default().max_rate);
}

// ===========================================================================
// Determinism and sharing
// ===========================================================================

#[test]
fn test_repeated_calls_are_byte_identical() {
    let engine = Engine::default();
    let params = json!({
        "initial_amount": 3_333.33,
        "annual_rate_percent": 9.99,
        "months": 77,
        "monthly_contribution": 123.45,
        "contribution_at_beginning": true,
    });
    for method in ["deposit_schedule_compound", "investment_calculator"] {
        let first = serde_json::to_string(&engine.call(method, params.clone()).unwrap()).unwrap();
        let second = serde_json::to_string(&engine.call(method, params.clone()).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    let loan = loan_params(777_777.77, 13.13, 131.0);
    let first = serde_json::to_string(&engine.call("compare_loan_schedules", loan.clone()).unwrap())
        .unwrap();
    let second =
        serde_json::to_string(&engine.call("compare_loan_schedules", loan).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_engine_shared_across_threads() {
    let counter = Arc::new(CountingObserver::new());
    let engine = Engine::with_observer(Limits::default(), Arc::clone(&counter)).unwrap();
    let expected = engine
        .call("loan_schedule_annuity", loan_params(90_000.0, 8.0, 60.0))
        .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..10 {
                    let out = engine
                        .call("loan_schedule_annuity", loan_params(90_000.0, 8.0, 60.0))
                        .unwrap();
                    assert_eq!(out, expected);
                }
            });
        }
    });

    assert_eq!(counter.successes(Operation::LoanScheduleAnnuity), 41);
    let snapshot = counter.snapshot();
    assert_eq!(snapshot.len(), Operation::ALL.len());
    assert_eq!(snapshot[0].success, 41);
}
