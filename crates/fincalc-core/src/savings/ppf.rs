use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::savings::projector::{project, ProjectionInput};
use crate::types::*;
use crate::FincalcResult;

/// Statutory PPF term.
pub const PPF_TERM_YEARS: u32 = 15;

fn default_ppf_rate() -> Percent {
    dec!(7.1)
}

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfInput {
    /// Deposit made at the start of every financial year.
    #[serde(default)]
    pub annual_investment: Money,
    /// Balance already accumulated in the account.
    #[serde(default)]
    pub current_balance: Money,
    /// Years of the 15-year term already elapsed.
    #[serde(default)]
    pub years_completed: u32,
    /// Scheme rate, percent per annum.
    #[serde(default = "default_ppf_rate")]
    pub rate_percent: Percent,
}

/// One financial year of the projection, interest credited at year end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfYearRow {
    pub year: u32,
    pub opening_balance: Money,
    pub deposit: Money,
    pub interest_credited: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfOutput {
    pub remaining_years: u32,
    pub maturity_amount: Money,
    pub total_investment: Money,
    pub total_interest: Money,
    pub schedule: Vec<PpfYearRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project a PPF balance to the end of its 15-year term.
pub fn calculate_ppf(input: &PpfInput) -> FincalcResult<ComputationOutput<PpfOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let remaining_years = PPF_TERM_YEARS.saturating_sub(input.years_completed);
    if input.years_completed > PPF_TERM_YEARS {
        warnings.push(format!(
            "years_completed {} exceeds the {}-year PPF term; no further accumulation projected",
            input.years_completed, PPF_TERM_YEARS
        ));
    }

    let projection = project(&ProjectionInput {
        opening_balance: input.current_balance,
        contribution_per_period: input.annual_investment,
        rate_percent: input.rate_percent,
        periods: remaining_years,
    });

    let output = PpfOutput {
        remaining_years,
        maturity_amount: projection.future_value,
        total_investment: projection.total_contributed,
        total_interest: projection.total_interest,
        schedule: build_schedule(input, remaining_years),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "term_years": PPF_TERM_YEARS,
        "rate_percent": input.rate_percent.to_string(),
        "deposit_timing": "start of year",
    });

    Ok(with_metadata(
        "PPF maturity projection (annual compounding)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn build_schedule(input: &PpfInput, remaining_years: u32) -> Vec<PpfYearRow> {
    let rate = rate_from_percent(input.rate_percent);

    let mut rows = Vec::with_capacity(remaining_years as usize);
    let mut balance = input.current_balance;
    for year in 1..=remaining_years {
        let opening = balance;
        let interest = (opening + input.annual_investment) * rate;
        balance = opening + input.annual_investment + interest;
        rows.push(PpfYearRow {
            year: input.years_completed + year,
            opening_balance: opening,
            deposit: input.annual_investment,
            interest_credited: interest,
            closing_balance: balance,
        });
    }
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
