use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print JSON to stdout.
pub fn print_json(value: &Value) {
    let mut out = io::stdout().lock();
    let written = serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| e.to_string())
        .and_then(|_| writeln!(out).map_err(|e| e.to_string()));
    if let Err(e) = written {
        eprintln!("JSON output error: {}", e);
    }
}
