use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::savings::projector::{grow, project, ProjectionInput};
use crate::types::*;
use crate::FincalcResult;

/// Deposits are accepted for the first 15 years of the account.
pub const SSY_DEPOSIT_YEARS: u32 = 15;
/// The account matures 21 years after opening.
pub const SSY_MATURITY_YEARS: u32 = 21;

fn default_ssy_rate() -> Percent {
    dec!(8.2)
}

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsyInput {
    /// Deposit made at the start of every financial year.
    #[serde(default)]
    pub annual_investment: Money,
    /// Balance already accumulated in the account.
    #[serde(default)]
    pub current_balance: Money,
    /// Years elapsed since the account was opened.
    #[serde(default)]
    pub years_completed: u32,
    /// Scheme rate, percent per annum.
    #[serde(default = "default_ssy_rate")]
    pub rate_percent: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsyOutput {
    pub deposit_years_remaining: u32,
    pub growth_only_years: u32,
    /// Balance at the end of the deposit phase, before the passive phase.
    pub balance_when_deposits_stop: Money,
    pub maturity_amount: Money,
    pub total_investment: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project a Sukanya Samriddhi account to its 21-year maturity: an active
/// deposit phase for the first 15 years, then passive compounding only.
pub fn calculate_ssy(input: &SsyInput) -> FincalcResult<ComputationOutput<SsyOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let years_to_maturity = SSY_MATURITY_YEARS.saturating_sub(input.years_completed);
    if input.years_completed > SSY_MATURITY_YEARS {
        warnings.push(format!(
            "years_completed {} exceeds the {}-year SSY maturity; no further accumulation projected",
            input.years_completed, SSY_MATURITY_YEARS
        ));
    }

    let deposit_years_remaining = SSY_DEPOSIT_YEARS
        .saturating_sub(input.years_completed)
        .min(years_to_maturity);
    let growth_only_years = years_to_maturity - deposit_years_remaining;

    let deposit_phase = project(&ProjectionInput {
        opening_balance: input.current_balance,
        contribution_per_period: input.annual_investment,
        rate_percent: input.rate_percent,
        periods: deposit_years_remaining,
    });

    let maturity_amount = grow(
        deposit_phase.future_value,
        input.rate_percent,
        growth_only_years,
    );

    let output = SsyOutput {
        deposit_years_remaining,
        growth_only_years,
        balance_when_deposits_stop: deposit_phase.future_value,
        maturity_amount,
        total_investment: deposit_phase.total_contributed,
        total_interest: maturity_amount - deposit_phase.total_contributed,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "deposit_years": SSY_DEPOSIT_YEARS,
        "maturity_years": SSY_MATURITY_YEARS,
        "rate_percent": input.rate_percent.to_string(),
        "deposit_timing": "start of year",
    });

    Ok(with_metadata(
        "SSY maturity projection (deposit phase then passive compounding)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
