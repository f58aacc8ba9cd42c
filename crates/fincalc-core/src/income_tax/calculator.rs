use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::income_tax::regimes::{AgeGroup, RegimeParameters, TaxRegime};
use crate::income_tax::slab::{compute_tax, SlabTax};
use crate::types::*;
use crate::{FincalcError, FincalcResult};

fn default_age_group() -> AgeGroup {
    AgeGroup::Below60
}

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    #[serde(default)]
    pub gross_income: Money,
    pub regime: TaxRegime,
    #[serde(default = "default_age_group")]
    pub age_group: AgeGroup,
    /// Chapter VI-A deductions (80C, 80D, …). Old regime only.
    #[serde(default)]
    pub deductions: Money,
    /// Override the built-in parameter set with external versioned
    /// configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<RegimeParameters>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxOutput {
    pub gross_income: Money,
    pub standard_deduction: Money,
    pub deductions_claimed: Money,
    pub taxable_income: Money,
    pub tax: Money,
    pub cess: Money,
    pub rebate: Money,
    pub final_tax: Money,
    pub effective_rate_percent: Percent,
    pub schedule_version: String,
    pub slabwise: Vec<SlabTax>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Income tax for one assessment year: standard deduction, Chapter VI-A
/// deductions where the regime allows them, then the slab engine with the
/// regime's parameter set.
pub fn calculate_income_tax(
    input: &IncomeTaxInput,
) -> FincalcResult<ComputationOutput<IncomeTaxOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let params = match &input.params {
        Some(p) => p.clone(),
        None => RegimeParameters::preset(input.regime, input.age_group),
    };
    if params.standard_deduction < Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "standard_deduction".into(),
            reason: "cannot be negative".into(),
        });
    }

    let mut deductions = input.deductions.max(Decimal::ZERO);
    if input.regime == TaxRegime::New && !deductions.is_zero() {
        warnings.push(
            "Chapter VI-A deductions are not available under the new regime; ignored".to_string(),
        );
        deductions = Decimal::ZERO;
    }

    let taxable_income =
        (input.gross_income - params.standard_deduction - deductions).max(Decimal::ZERO);

    let computation = compute_tax(
        taxable_income,
        &params.schedule,
        params.cess_rate_percent,
        Some(&params.rebate),
    )?;

    let effective_rate_percent = if input.gross_income > Decimal::ZERO {
        computation.final_tax / input.gross_income * dec!(100)
    } else {
        Decimal::ZERO
    };

    let output = IncomeTaxOutput {
        gross_income: input.gross_income,
        standard_deduction: params.standard_deduction,
        deductions_claimed: deductions,
        taxable_income: computation.taxable_income,
        tax: computation.tax,
        cess: computation.cess,
        rebate: computation.rebate,
        final_tax: computation.final_tax,
        effective_rate_percent,
        schedule_version: params.schedule.version.clone(),
        slabwise: computation.slabwise,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "schedule_version": params.schedule.version,
        "cess_rate_percent": params.cess_rate_percent.to_string(),
        "standard_deduction": params.standard_deduction.to_string(),
    });

    Ok(with_metadata(
        "Slab-based income tax with cess and rebate",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
