use serde_json::Value;

/// Key result fields, most specific first.
const PRIORITY_KEYS: [&str; 6] = [
    "monthly_payment",
    "first_month_payment",
    "cheaper_type",
    "roi_percent",
    "final_balance",
    "max_principal",
];

/// Print just the key answer value from the output.
///
/// Looks in the summary (or a comparison's difference block) for the
/// first well-known field, then falls back to the first field there.
pub fn print_minimal(value: &Value) {
    let section = value
        .get("summary")
        .or_else(|| value.pointer("/comparison/difference"))
        .unwrap_or(value);

    if let Value::Object(map) = section {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(section));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
