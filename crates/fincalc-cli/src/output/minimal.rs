use serde_json::Value;

use fincalc_core::format::format_inr;

use super::as_decimal;

/// The headline figure each calculator is asked for, in priority order.
const PRIORITY_KEYS: &[&str] = &[
    "maturity_amount",
    "final_tax",
    "exemption",
    "corpus_at_retirement",
    "future_value",
    "emi",
    "total_penalty",
];

/// Print just the headline answer, short-formatted the way the calculators
/// display it (₹40.68 L).
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
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

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    if let Some(amount) = as_decimal(value) {
        return format_inr(amount);
    }

    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
