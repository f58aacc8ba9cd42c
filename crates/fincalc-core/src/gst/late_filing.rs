use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::*;
use crate::FincalcResult;

/// Interest on unpaid tax accrues at 18% per annum, prorated by day.
const ANNUAL_INTEREST_PERCENT: Decimal = dec!(18);
const DAYS_PER_YEAR: Decimal = dec!(365);
/// The flat late fee is capped regardless of delay length.
const LATE_FEE_CAP: Decimal = dec!(10_000);
/// Turnover at or below ₹1.5 Cr pays the concessional per-day fee.
const SMALL_TAXPAYER_TURNOVER_LIMIT: Decimal = dec!(15_000_000);
const LATE_FEE_PER_DAY_SMALL: Decimal = dec!(20);
const LATE_FEE_PER_DAY_LARGE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gstr3bInput {
    #[serde(default)]
    pub outstanding_tax: Option<Money>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub filing_date: Option<NaiveDate>,
    #[serde(default)]
    pub annual_turnover: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gstr3bOutput {
    pub delay_days: i64,
    pub interest: Money,
    pub late_fee: Money,
    pub total_penalty: Money,
}

impl Gstr3bOutput {
    fn zero() -> Self {
        Gstr3bOutput {
            delay_days: 0,
            interest: Decimal::ZERO,
            late_fee: Decimal::ZERO,
            total_penalty: Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Interest and late fee for a delayed GSTR-3B filing. Incomplete input
/// yields an all-zero result; the surrounding form decides when the
/// computation is meaningful.
pub fn calculate_gstr3b_delay(
    input: &Gstr3bInput,
) -> FincalcResult<ComputationOutput<Gstr3bOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let assumptions = serde_json::json!({
        "interest_rate_percent": ANNUAL_INTEREST_PERCENT.to_string(),
        "late_fee_cap": LATE_FEE_CAP.to_string(),
        "small_taxpayer_turnover_limit": SMALL_TAXPAYER_TURNOVER_LIMIT.to_string(),
    });

    let (outstanding, due, filed, turnover) = match (
        input.outstanding_tax,
        input.due_date,
        input.filing_date,
        input.annual_turnover,
    ) {
        (Some(o), Some(d), Some(f), Some(t)) => (o.max(Decimal::ZERO), d, f, t),
        _ => {
            warnings.push("incomplete input; returning a zero penalty".to_string());
            let elapsed = start.elapsed().as_micros() as u64;
            return Ok(with_metadata(
                "GSTR-3B late-filing penalty",
                &assumptions,
                warnings,
                elapsed,
                Gstr3bOutput::zero(),
            ));
        }
    };

    let delay_days = (filed - due).num_days().max(0);
    let days = Decimal::from(delay_days);

    let interest = outstanding * rate_from_percent(ANNUAL_INTEREST_PERCENT) * days / DAYS_PER_YEAR;

    let late_fee = if delay_days == 0 {
        Decimal::ZERO
    } else {
        let per_day = if turnover <= SMALL_TAXPAYER_TURNOVER_LIMIT {
            LATE_FEE_PER_DAY_SMALL
        } else {
            LATE_FEE_PER_DAY_LARGE
        };
        (per_day * days).min(LATE_FEE_CAP)
    };

    let output = Gstr3bOutput {
        delay_days,
        interest,
        late_fee,
        total_penalty: interest + late_fee,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "GSTR-3B late-filing penalty",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ten_day_delay_for_a_small_taxpayer() {
        // interest = 100_000 * 18% * 10/365 ≈ 493.15, fee = 10 * 20 = 200
        let input = Gstr3bInput {
            outstanding_tax: Some(dec!(100_000)),
            due_date: Some(date(2025, 4, 20)),
            filing_date: Some(date(2025, 4, 30)),
            annual_turnover: Some(dec!(10_000_000)),
        };
        let result = calculate_gstr3b_delay(&input).unwrap();
        let out = &result.result;

        assert_eq!(out.delay_days, 10);
        assert_eq!(out.interest.round_dp(2), dec!(493.15));
        assert_eq!(out.late_fee, dec!(200));
        assert_eq!(out.total_penalty.round_dp(2), dec!(693.15));
    }

    #[test]
    fn larger_turnover_pays_the_full_per_day_fee() {
        let input = Gstr3bInput {
            outstanding_tax: Some(dec!(100_000)),
            due_date: Some(date(2025, 4, 20)),
            filing_date: Some(date(2025, 4, 30)),
            annual_turnover: Some(dec!(20_000_000)),
        };
        let result = calculate_gstr3b_delay(&input).unwrap();

        assert_eq!(result.result.late_fee, dec!(1_000));
    }

    #[test]
    fn late_fee_caps_at_ten_thousand() {
        // 200 days * 100/day = 20_000, capped.
        let input = Gstr3bInput {
            outstanding_tax: Some(dec!(100_000)),
            due_date: Some(date(2024, 10, 20)),
            filing_date: Some(date(2025, 5, 8)),
            annual_turnover: Some(dec!(20_000_000)),
        };
        let result = calculate_gstr3b_delay(&input).unwrap();

        assert_eq!(result.result.delay_days, 200);
        assert_eq!(result.result.late_fee, dec!(10_000));
    }

    #[test]
    fn filing_on_or_before_the_due_date_costs_nothing() {
        let input = Gstr3bInput {
            outstanding_tax: Some(dec!(100_000)),
            due_date: Some(date(2025, 4, 20)),
            filing_date: Some(date(2025, 4, 20)),
            annual_turnover: Some(dec!(10_000_000)),
        };
        let result = calculate_gstr3b_delay(&input).unwrap();
        assert_eq!(result.result, Gstr3bOutput::zero());

        let early = Gstr3bInput {
            filing_date: Some(date(2025, 4, 10)),
            ..input
        };
        let result = calculate_gstr3b_delay(&early).unwrap();
        assert_eq!(result.result, Gstr3bOutput::zero());
    }

    #[test]
    fn missing_fields_yield_a_zero_result() {
        let input = Gstr3bInput {
            outstanding_tax: Some(dec!(100_000)),
            due_date: None,
            filing_date: Some(date(2025, 4, 30)),
            annual_turnover: Some(dec!(10_000_000)),
        };
        let result = calculate_gstr3b_delay(&input).unwrap();

        assert_eq!(result.result, Gstr3bOutput::zero());
        assert_eq!(result.warnings.len(), 1);
    }
}
