use clap::Args;

use finance_schedule_core::CompoundingInput;

use crate::commands::{CliEngine, CommandResult};
use crate::input;

/// Arguments shared by the deposit and investment commands
#[derive(Args)]
pub struct CompoundingArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Opening balance
    #[arg(long)]
    pub initial_amount: Option<f64>,

    /// Annual interest rate in percent (12 = 12% p.a.)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in months
    #[arg(long)]
    pub months: Option<f64>,

    /// Amount added every month
    #[arg(long, default_value_t = 0.0)]
    pub contribution: f64,

    /// Add the contribution before the month's interest accrues
    #[arg(long)]
    pub at_beginning: bool,
}

pub fn run_deposit(args: CompoundingArgs, engine: &CliEngine) -> CommandResult {
    let deposit = compounding_input(args)?;
    let result = engine.deposit_schedule_compound(&deposit)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_investment(args: CompoundingArgs, engine: &CliEngine) -> CommandResult {
    let investment = compounding_input(args)?;
    let result = engine.investment_calculator(&investment)?;
    Ok(serde_json::to_value(result)?)
}

fn compounding_input(
    args: CompoundingArgs,
) -> Result<CompoundingInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let initial_amount = args
        .initial_amount
        .ok_or("--initial-amount is required (or provide --input)")?;
    let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
    let months = args
        .months
        .ok_or("--months is required (or provide --input)")?;

    Ok(CompoundingInput {
        initial_amount,
        annual_rate_percent: rate,
        months,
        monthly_contribution: args.contribution,
        contribution_at_beginning: args.at_beginning,
    })
}
