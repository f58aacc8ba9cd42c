use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loans::emi::emi;
use crate::types::*;
use crate::FincalcResult;

/// Half of disposable income is treated as the serviceable EMI budget.
const DISPOSABLE_SHARE: Decimal = dec!(0.5);
/// Floor for the budget denominator when expenses eat the whole income.
const DENOMINATOR_FLOOR: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordabilityBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AffordabilityBand {
    /// Published guidance table: >90 Poor, >70 Fair, >50 Good, else
    /// Excellent.
    pub fn from_ratio(ratio_percent: Percent) -> Self {
        if ratio_percent > dec!(90) {
            AffordabilityBand::Poor
        } else if ratio_percent > dec!(70) {
            AffordabilityBand::Fair
        } else if ratio_percent > dec!(50) {
            AffordabilityBand::Good
        } else {
            AffordabilityBand::Excellent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub ratio_percent: Percent,
    pub band: AffordabilityBand,
    pub disposable_income: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarLoanInput {
    #[serde(default)]
    pub loan_amount: Money,
    #[serde(default)]
    pub annual_rate_percent: Percent,
    #[serde(default)]
    pub term_months: u32,
    #[serde(default)]
    pub monthly_income: Money,
    #[serde(default)]
    pub monthly_expenses: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarLoanOutput {
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub disposable_income: Money,
    pub ratio_percent: Percent,
    pub band: AffordabilityBand,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// EMI as a share of half the disposable income, bucketed into the guidance
/// bands.
pub fn affordability(
    emi_amount: Money,
    monthly_income: Money,
    monthly_expenses: Money,
) -> AffordabilityResult {
    let disposable_income = monthly_income - monthly_expenses;
    let budget = (disposable_income * DISPOSABLE_SHARE).max(DENOMINATOR_FLOOR);
    let ratio_percent = emi_amount / budget * dec!(100);

    AffordabilityResult {
        ratio_percent,
        band: AffordabilityBand::from_ratio(ratio_percent),
        disposable_income,
    }
}

/// Car-loan EMI plus the affordability check against household cash flow.
pub fn calculate_car_loan(input: &CarLoanInput) -> FincalcResult<ComputationOutput<CarLoanOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if input.term_months == 0 {
        warnings.push("term_months is 0; no instalment can be computed".to_string());
    }

    let instalment = emi(input.loan_amount, input.annual_rate_percent, input.term_months);
    let total_payment = instalment * Decimal::from(input.term_months);
    let check = affordability(instalment, input.monthly_income, input.monthly_expenses);

    if check.disposable_income <= Decimal::ZERO {
        warnings.push("monthly expenses meet or exceed income; no EMI budget".to_string());
    }

    let output = CarLoanOutput {
        emi: instalment,
        total_payment,
        total_interest: if input.term_months == 0 {
            Decimal::ZERO
        } else {
            total_payment - input.loan_amount
        },
        disposable_income: check.disposable_income,
        ratio_percent: check.ratio_percent,
        band: check.band,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "annual_rate_percent": input.annual_rate_percent.to_string(),
        "emi_budget": "50% of disposable income",
    });

    Ok(with_metadata(
        "Car loan EMI with affordability banding",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
