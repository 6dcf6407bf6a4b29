pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Round every decimal figure under `result` to `dp` places for display.
///
/// Decimals travel as JSON strings; anything that does not parse as one is
/// left alone, as is the envelope outside `result`.
pub fn round_result(value: &mut Value, dp: u32) {
    if let Some(result) = value.get_mut("result") {
        round_in_place(result, dp);
    }
}

fn round_in_place(value: &mut Value, dp: u32) {
    match value {
        Value::String(s) => {
            if let Ok(d) = s.parse::<Decimal>() {
                *s = d
                    .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
                    .to_string();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(|v| round_in_place(v, dp)),
        Value::Object(map) => map.values_mut().for_each(|v| round_in_place(v, dp)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_result_only_touches_result() {
        let mut value = json!({
            "result": {
                "monthly_payment": "1060.6551523907553",
                "term_months": 120,
                "schedule": [{ "month": 1, "interest_portion": "416.666666666" }],
                "breakdown": { "principal": { "label": "principal", "share": "0.785678" } }
            },
            "metadata": { "version": "0.1.0", "precision": "1.23456" }
        });
        round_result(&mut value, 2);

        assert_eq!(value["result"]["monthly_payment"], "1060.66");
        assert_eq!(value["result"]["term_months"], 120);
        assert_eq!(value["result"]["schedule"][0]["interest_portion"], "416.67");
        assert_eq!(value["result"]["breakdown"]["principal"]["label"], "principal");
        assert_eq!(value["result"]["breakdown"]["principal"]["share"], "0.79");
        assert_eq!(value["metadata"]["precision"], "1.23456");
    }
}
