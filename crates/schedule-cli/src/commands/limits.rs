use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finance_schedule_core::Limits;

use crate::commands::{CliEngine, CommandResult};
use crate::input;

/// Bounds every calculation is validated against.
///
/// Precedence, highest first: `--limits` file, individual flags, the
/// matching environment variables, built-in defaults.
#[derive(Args, Debug, Default)]
pub struct LimitsArgs {
    /// Path to a JSON file of limits (overrides individual flags)
    #[arg(long, global = true)]
    pub limits: Option<String>,

    /// Largest accepted principal or initial amount
    #[arg(long, env = "MAX_PRINCIPAL", global = true)]
    pub max_principal: Option<Decimal>,

    /// Largest accepted monthly contribution
    #[arg(long, env = "MAX_CONTRIBUTION", global = true)]
    pub max_contribution: Option<Decimal>,

    /// Longest accepted term in months
    #[arg(long, env = "MAX_MONTHS", global = true)]
    pub max_months: Option<u32>,

    /// Highest accepted annual rate in percent
    #[arg(long, env = "MAX_RATE", global = true)]
    pub max_rate: Option<Decimal>,

    /// Compounding fails once a balance exceeds this value
    #[arg(long, env = "MAX_BALANCE_CAP", global = true)]
    pub max_balance_cap: Option<Decimal>,
}

/// Layer flags over defaults, then the limits file over both.
pub fn resolve(args: &LimitsArgs) -> Result<Limits, Box<dyn std::error::Error>> {
    let defaults = Limits::default();
    let mut limits = Limits {
        max_principal: args.max_principal.unwrap_or(defaults.max_principal),
        max_contribution: args.max_contribution.unwrap_or(defaults.max_contribution),
        max_months: args.max_months.unwrap_or(defaults.max_months),
        max_rate: args.max_rate.unwrap_or(defaults.max_rate),
        max_balance_cap: args.max_balance_cap.unwrap_or(defaults.max_balance_cap),
    };

    if let Some(ref path) = args.limits {
        let overrides = input::file::read_json_value(path)?;
        limits = merge(limits, overrides)?;
    }

    Ok(limits)
}

fn merge(base: Limits, overrides: Value) -> Result<Limits, Box<dyn std::error::Error>> {
    let Value::Object(fields) = overrides else {
        return Err("limits file must contain a JSON object".into());
    };
    let mut merged = serde_json::to_value(base)?;
    if let Value::Object(ref mut map) = merged {
        for (key, val) in fields {
            if !map.contains_key(&key) {
                return Err(format!("unknown limit '{}'", key).into());
            }
            map.insert(key, val);
        }
    }
    Ok(serde_json::from_value(merged)?)
}

pub fn run_limits(engine: &CliEngine) -> CommandResult {
    Ok(serde_json::to_value(engine.limits())?)
}
