use clap::Args;
use serde_json::Value;

use crate::commands::{CliEngine, CommandResult};
use crate::input;

/// Arguments for invoking an operation by name
#[derive(Args)]
pub struct CallArgs {
    /// Method name, e.g. loan_schedule_annuity
    pub method: String,

    /// Path to JSON params file (otherwise read from stdin)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_call(args: CallArgs, engine: &CliEngine) -> CommandResult {
    let params: Value = if let Some(ref path) = args.input {
        input::file::read_json_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("--input <file.json> or stdin required for call".into());
    };
    Ok(engine.call(&args.method, params)?)
}
