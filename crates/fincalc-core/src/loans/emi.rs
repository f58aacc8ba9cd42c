use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::*;
use crate::FincalcResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    #[serde(default)]
    pub principal: Money,
    #[serde(default)]
    pub annual_rate_percent: Percent,
    #[serde(default)]
    pub term_months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Fixed monthly instalment that fully amortises the loan:
/// P·r·(1+r)^n / ((1+r)^n − 1) at the monthly rate r. A zero rate falls back
/// to straight division.
pub fn emi(principal: Money, annual_rate_percent: Percent, term_months: u32) -> Money {
    if term_months == 0 {
        return Decimal::ZERO;
    }

    let monthly_rate = rate_from_percent(annual_rate_percent) / dec!(12);
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let growth = (Decimal::ONE + monthly_rate).powi(term_months as i64);
    principal * monthly_rate * growth / (growth - Decimal::ONE)
}

pub fn calculate_emi(input: &EmiInput) -> FincalcResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if input.term_months == 0 {
        warnings.push("term_months is 0; no instalment can be computed".to_string());
    }

    let instalment = emi(input.principal, input.annual_rate_percent, input.term_months);
    let total_payment = instalment * Decimal::from(input.term_months);
    let total_interest = if input.term_months == 0 {
        Decimal::ZERO
    } else {
        total_payment - input.principal
    };

    let output = EmiOutput {
        emi: instalment,
        total_payment,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "annual_rate_percent": input.annual_rate_percent.to_string(),
        "compounding": "monthly",
    });

    Ok(with_metadata(
        "Amortising EMI",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
