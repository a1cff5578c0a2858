//! Canonical money rounding and the f64 input boundary.
//!
//! Every money value the calculators produce goes through [`round2`]: two
//! decimal places, midpoints rounded away from zero (0.125 -> 0.13,
//! -0.125 -> -0.13). Rounding is applied to each component before it is
//! accumulated, so running totals are sums of already-rounded cents.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ScheduleError;
use crate::ScheduleResult;

pub const MONEY_DP: u32 = 2;

pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

pub fn is_finite(value: f64) -> bool {
    value.is_finite()
}

/// Convert a caller-supplied float into a Decimal, rejecting NaN and infinities.
pub fn to_decimal(field: &str, value: f64) -> ScheduleResult<Decimal> {
    if !is_finite(value) {
        return Err(ScheduleError::InvalidInput {
            field: field.into(),
            constraint: "must be a finite number".into(),
            value: value.to_string(),
        });
    }
    Decimal::from_f64(value).ok_or_else(|| ScheduleError::InvalidInput {
        field: field.into(),
        constraint: "must be representable as a decimal amount".into(),
        value: value.to_string(),
    })
}
