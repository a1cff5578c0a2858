use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(comparison) = map.get("comparison") {
                print_comparison(comparison, map);
            } else if map.contains_key("summary") {
                print_schedule_result(map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

/// Summary (and growth metrics, if any) as field/value tables, then one row per month.
fn print_schedule_result(result: &Map<String, Value>) {
    if let Some(summary) = result.get("summary") {
        print_flat_object(summary);
    }

    if let Some(metrics) = result.get("growth_metrics") {
        println!("\nGrowth metrics:");
        print_flat_object(metrics);
    }

    if let Some(Value::Array(schedule)) = result.get("schedule") {
        println!("\nSchedule:");
        print_array_table(schedule);
    }
}

fn print_comparison(comparison: &Value, envelope: &Map<String, Value>) {
    let Value::Object(cmp) = comparison else {
        print_flat_object(&Value::Object(envelope.clone()));
        return;
    };

    let annuity = cmp.get("annuity").unwrap_or(&Value::Null);
    let differential = cmp.get("differential").unwrap_or(&Value::Null);
    let mut builder = Builder::default();
    builder.push_record(["Field", "Annuity", "Differential"]);
    for key in [
        "total_paid",
        "total_interest",
        "overpayment_percent",
        "monthly_payment",
        "first_month_payment",
        "last_month_payment",
    ] {
        builder.push_record([
            key.to_string(),
            annuity.get(key).map(format_value).unwrap_or_default(),
            differential.get(key).map(format_value).unwrap_or_default(),
        ]);
    }
    println!("{}", Table::from(builder));

    if let Some(difference) = cmp.get("difference") {
        println!("\nDifference:");
        print_flat_object(difference);
    }

    for (key, title) in [
        ("annuity_advantages", "Annuity advantages"),
        ("differential_advantages", "Differential advantages"),
    ] {
        if let Some(Value::Array(items)) = cmp.get(key) {
            println!("\n{}:", title);
            for item in items {
                if let Value::String(s) = item {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(recommendation)) = cmp.get("recommendation") {
        println!("\nRecommendation: {}", recommendation);
    }

    for (key, title) in [
        ("annuity", "Annuity schedule"),
        ("differential", "Differential schedule"),
    ] {
        if let Some(Value::Array(schedule)) = envelope.get(key).and_then(|r| r.get("schedule")) {
            println!("\n{}:", title);
            print_array_table(schedule);
        }
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Headers come from the first row; every schedule row has the same keys
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
