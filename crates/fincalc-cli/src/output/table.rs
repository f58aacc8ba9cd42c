use serde_json::Value;
use tabled::{builder::Builder, Table};

use fincalc_core::format::group_inr;

use super::as_decimal;

/// Result fields rendered as grouped rupee amounts. Rates, ratios, day and
/// year counts stay as plain numbers.
const MONEY_FIELDS: &[&str] = &[
    "maturity_amount",
    "total_investment",
    "total_interest",
    "balance_when_deposits_stop",
    "future_value",
    "invested_amount",
    "estimated_returns",
    "corpus_at_retirement",
    "total_contributed",
    "total_growth",
    "lump_sum",
    "annuity_purchase",
    "monthly_pension",
    "gross_income",
    "standard_deduction",
    "deductions_claimed",
    "taxable_income",
    "tax",
    "cess",
    "rebate",
    "final_tax",
    "hra_received",
    "salary_percentage_cap",
    "rent_over_tenth_of_basic",
    "exemption",
    "taxable_hra",
    "emi",
    "total_payment",
    "disposable_income",
    "outstanding_tax",
    "interest",
    "late_fee",
    "total_penalty",
];

/// Render the result section as a field/value table, followed by any
/// warnings and the methodology line.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            builder.push_record([key.as_str(), &format_value(key, val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(key, val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_array_table(arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", item);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(|v| format_value(h, v)).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}

fn format_value(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Some(amount) = as_decimal(value) {
            return group_inr(amount);
        }
    }

    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(items) => format!("[{} rows]", items.len()),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
