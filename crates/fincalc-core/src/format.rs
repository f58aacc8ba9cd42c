use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::Money;

const ONE_CRORE: Decimal = dec!(10_000_000);
const ONE_LAKH: Decimal = dec!(100_000);

/// Short-form INR: crores at and above 1 Cr, lakhs at and above 1 L,
/// grouped whole rupees below that.
pub fn format_inr(amount: Money) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let abs = amount.abs();

    let formatted = if abs >= ONE_CRORE {
        format!("₹{:.2} Cr", round2(abs / ONE_CRORE))
    } else if abs >= ONE_LAKH {
        format!("₹{:.2} L", round2(abs / ONE_LAKH))
    } else {
        format!("₹{}", group_digits(&whole_rupees(abs)))
    };

    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Whole rupees with Indian digit grouping (₹12,34,567), no scale suffix.
pub fn group_inr(amount: Money) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let grouped = group_digits(&whole_rupees(amount.abs()));

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn whole_rupees(abs: Decimal) -> String {
    abs.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Indian grouping: last three digits, then pairs.
fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
