use serde_json::Value;

/// Headline fields, most important first.
const PRIORITY_KEYS: [&str; 4] = [
    "monthly_payment",
    "installment",
    "total_payment",
    "total_interest",
];

/// Print just the key answer value from the output.
///
/// For a loan that is the monthly payment; for a schedule it is the number
/// of rows. Falls back to the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            for key in PRIORITY_KEYS {
                if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val));
                return;
            }
            println!("{{}}");
        }
        Value::Array(rows) => println!("{}", rows.len()),
        other => println!("{}", format_minimal(other)),
    }
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
