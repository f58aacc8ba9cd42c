use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::savings::projector::{annuity_future_value, grow};
use crate::types::*;
use crate::FincalcResult;

/// NPS corpus is drawn down at the statutory retirement age.
pub const NPS_RETIREMENT_AGE: u32 = 60;
/// At least this share of the corpus must buy an annuity on exit.
const MIN_ANNUITY_PERCENT: Decimal = dec!(40);

fn default_nps_return() -> Percent {
    dec!(10)
}

fn default_annuity_percent() -> Percent {
    MIN_ANNUITY_PERCENT
}

fn default_annuity_rate() -> Percent {
    dec!(6)
}

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpsInput {
    /// Contribution made at the start of every month until retirement.
    #[serde(default)]
    pub monthly_contribution: Money,
    #[serde(default)]
    pub current_age: u32,
    /// Corpus already accumulated in the account.
    #[serde(default)]
    pub current_corpus: Money,
    /// Expected growth of the corpus, percent per annum.
    #[serde(default = "default_nps_return")]
    pub expected_return_percent: Percent,
    /// Share of the retirement corpus used to buy an annuity.
    #[serde(default = "default_annuity_percent")]
    pub annuity_percent: Percent,
    /// Annuity payout rate, percent per annum on the purchase amount.
    #[serde(default = "default_annuity_rate")]
    pub annuity_rate_percent: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpsOutput {
    pub months_to_retirement: u32,
    pub corpus_at_retirement: Money,
    pub total_contributed: Money,
    pub total_growth: Money,
    pub lump_sum: Money,
    pub annuity_purchase: Money,
    pub monthly_pension: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project an NPS corpus to retirement at 60 and split it into the lump-sum
/// withdrawal and the annuity that pays the monthly pension.
pub fn calculate_nps(input: &NpsInput) -> FincalcResult<ComputationOutput<NpsOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let months = NPS_RETIREMENT_AGE.saturating_sub(input.current_age) * 12;
    if input.current_age >= NPS_RETIREMENT_AGE {
        warnings.push(format!(
            "current_age {} is at or past the retirement age of {}; the corpus is taken as is",
            input.current_age, NPS_RETIREMENT_AGE
        ));
    }

    // The corpus compounds monthly at one-twelfth of the annual rate.
    let monthly_rate_percent = input.expected_return_percent / dec!(12);
    let corpus_at_retirement = grow(input.current_corpus, monthly_rate_percent, months)
        + annuity_future_value(input.monthly_contribution, monthly_rate_percent, months);

    let annuity_percent = clamp_annuity_percent(input.annuity_percent, &mut warnings);
    let annuity_purchase = corpus_at_retirement * rate_from_percent(annuity_percent);
    let lump_sum = corpus_at_retirement - annuity_purchase;
    let monthly_pension =
        annuity_purchase * rate_from_percent(input.annuity_rate_percent) / dec!(12);

    let total_contributed =
        input.current_corpus + input.monthly_contribution * Decimal::from(months);

    let output = NpsOutput {
        months_to_retirement: months,
        corpus_at_retirement,
        total_contributed,
        total_growth: corpus_at_retirement - total_contributed,
        lump_sum,
        annuity_purchase,
        monthly_pension,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "retirement_age": NPS_RETIREMENT_AGE,
        "expected_return_percent": input.expected_return_percent.to_string(),
        "annuity_rate_percent": input.annuity_rate_percent.to_string(),
        "contribution_timing": "start of month",
    });

    Ok(with_metadata(
        "NPS corpus projection with annuity split",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn clamp_annuity_percent(requested: Percent, warnings: &mut Vec<String>) -> Percent {
    let clamped = requested.max(Decimal::ZERO).min(dec!(100));
    if clamped != requested {
        warnings.push(format!(
            "annuity_percent {} clamped to {}",
            requested, clamped
        ));
    }
    if clamped < MIN_ANNUITY_PERCENT {
        warnings.push(format!(
            "annuity_percent {} is below the {}% statutory minimum annuity purchase",
            clamped, MIN_ANNUITY_PERCENT
        ));
    }
    clamped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
