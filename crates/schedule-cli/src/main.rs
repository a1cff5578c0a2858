mod commands;
mod input;
mod observer;
mod output;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;

use commands::dispatch::CallArgs;
use commands::limits::LimitsArgs;
use commands::loans::LoanArgs;
use commands::savings::CompoundingArgs;
use output::OutputFormat;

/// Deterministic loan and deposit schedules
#[derive(Parser)]
#[command(
    name = "fsched",
    version,
    about = "Deterministic loan and deposit schedules",
    long_about = "A CLI for month-by-month loan amortization (annuity and differential), \
                  compound deposits and investment growth, computed with decimal \
                  precision and two-decimal rounding at every step."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    #[command(flatten)]
    limits: LimitsArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Level-payment (annuity) loan schedule
    Annuity(LoanArgs),
    /// Equal-principal (differential) loan schedule
    Differential(LoanArgs),
    /// Compound deposit schedule with optional monthly contributions
    Deposit(CompoundingArgs),
    /// Compare annuity and differential repayment of the same loan
    Compare(LoanArgs),
    /// Deposit schedule plus ROI, CAGR and profit metrics
    Investment(CompoundingArgs),
    /// Invoke an operation by method name with JSON params
    Call(CallArgs),
    /// Print the effective limits
    Limits,
    /// Print version information
    Version,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Version => {
            println!("fsched {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        command => commands::build_engine(&cli.limits).and_then(|engine| run(command, &engine)),
    };

    match result {
        Ok(value) => {
            output::format_output(cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run(command: Commands, engine: &commands::CliEngine) -> commands::CommandResult {
    match command {
        Commands::Annuity(args) => commands::loans::run_annuity(args, engine),
        Commands::Differential(args) => commands::loans::run_differential(args, engine),
        Commands::Compare(args) => commands::loans::run_compare(args, engine),
        Commands::Deposit(args) => commands::savings::run_deposit(args, engine),
        Commands::Investment(args) => commands::savings::run_investment(args, engine),
        Commands::Call(args) => commands::dispatch::run_call(args, engine),
        Commands::Limits => commands::limits::run_limits(engine),
        Commands::Version => Ok(serde_json::json!({ "version": env!("CARGO_PKG_VERSION") })),
    }
}
