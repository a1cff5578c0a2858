pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use clap::ValueEnum;
use serde_json::Value;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, decimals as strings
    Json,
    /// Summary tables followed by the month-by-month schedule
    Table,
    /// Schedule rows, or field/value pairs for summaries and comparisons
    Csv,
    /// The single headline figure
    Minimal,
}

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}
