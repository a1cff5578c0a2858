use clap::Args;

use finance_schedule_core::LoanInput;

use crate::commands::{CliEngine, CommandResult};
use crate::input;

/// Arguments shared by the annuity, differential and compare commands
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent (12 = 12% p.a.)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in months
    #[arg(long)]
    pub months: Option<f64>,
}

pub fn run_annuity(args: LoanArgs, engine: &CliEngine) -> CommandResult {
    let loan = loan_input(args)?;
    let result = engine.loan_schedule_annuity(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_differential(args: LoanArgs, engine: &CliEngine) -> CommandResult {
    let loan = loan_input(args)?;
    let result = engine.loan_schedule_differential(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compare(args: LoanArgs, engine: &CliEngine) -> CommandResult {
    let loan = loan_input(args)?;
    let result = engine.compare_loan_schedules(&loan)?;
    Ok(serde_json::to_value(result)?)
}

fn loan_input(args: LoanArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let principal = args
        .principal
        .ok_or("--principal is required (or provide --input)")?;
    let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
    let months = args
        .months
        .ok_or("--months is required (or provide --input)")?;

    Ok(LoanInput {
        principal,
        annual_rate_percent: rate,
        months,
    })
}
