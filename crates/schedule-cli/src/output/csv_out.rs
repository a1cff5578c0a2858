use serde_json::{Map, Value};
use std::io;

/// Write output as CSV to stdout.
///
/// Schedules become one row per month. A comparison becomes dotted
/// field/value pairs; its two schedules are available from the
/// `annuity` and `differential` commands.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Object(comparison)) = map.get("comparison") {
                let _ = wtr.write_record(["field", "value"]);
                write_flattened(&mut wtr, "", comparison);
            } else if let Some(Value::Array(schedule)) = map.get("schedule") {
                write_array_csv(&mut wtr, schedule);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                write_flattened(&mut wtr, "", map);
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_flattened(
    wtr: &mut csv::Writer<io::StdoutLock<'_>>,
    prefix: &str,
    map: &Map<String, Value>,
) {
    for (key, val) in map {
        let field = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match val {
            Value::Object(inner) => write_flattened(wtr, &field, inner),
            _ => {
                let _ = wtr.write_record([field.as_str(), &format_csv_value(val)]);
            }
        }
    }
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(format_csv_value)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
