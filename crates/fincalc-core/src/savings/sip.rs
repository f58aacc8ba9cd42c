use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::savings::projector::{project, ProjectionInput};
use crate::types::*;
use crate::FincalcResult;

fn default_sip_return() -> Percent {
    dec!(12)
}

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    /// Instalment made at the start of every month.
    #[serde(default)]
    pub monthly_investment: Money,
    /// Expected growth, percent per annum.
    #[serde(default = "default_sip_return")]
    pub expected_return_percent: Percent,
    #[serde(default)]
    pub years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    pub months: u32,
    pub invested_amount: Money,
    pub estimated_returns: Money,
    pub future_value: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Future value of a level monthly SIP, compounded monthly at one-twelfth of
/// the expected annual rate.
pub fn calculate_sip(input: &SipInput) -> FincalcResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();

    let months = input.years * 12;
    let projection = project(&ProjectionInput {
        opening_balance: Decimal::ZERO,
        contribution_per_period: input.monthly_investment,
        rate_percent: input.expected_return_percent / dec!(12),
        periods: months,
    });

    let output = SipOutput {
        months,
        invested_amount: projection.total_contributed,
        estimated_returns: projection.total_interest,
        future_value: projection.future_value,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "expected_return_percent": input.expected_return_percent.to_string(),
        "instalment_timing": "start of month",
    });

    Ok(with_metadata(
        "SIP future value (monthly compounding)",
        &assumptions,
        Vec::new(),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
