use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};

use crate::types::{rate_from_percent, Money, Percent};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// One discrete accumulation run: a starting balance plus a level
/// contribution credited at the start of every period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    #[serde(default)]
    pub opening_balance: Money,
    #[serde(default)]
    pub contribution_per_period: Money,
    #[serde(default)]
    pub rate_percent: Percent,
    #[serde(default)]
    pub periods: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOutput {
    pub future_value: Money,
    pub total_contributed: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Period-by-period accumulation with the contribution credited at the start
/// of each period, the convention published for PPF and SSY.
///
/// Zero periods returns the opening balance untouched. Negative rates and
/// balances are accepted as given.
pub fn project(input: &ProjectionInput) -> ProjectionOutput {
    let growth = Decimal::ONE + rate_from_percent(input.rate_percent);

    let mut balance = input.opening_balance;
    for _ in 0..input.periods {
        balance = (balance + input.contribution_per_period) * growth;
    }

    let total_contributed =
        input.opening_balance + input.contribution_per_period * Decimal::from(input.periods);

    ProjectionOutput {
        future_value: balance,
        total_contributed,
        total_interest: balance - total_contributed,
    }
}

/// Passive compounding of an existing balance with no further contributions.
/// Used to chain a post-contribution phase onto a finished accumulation run.
pub fn grow(balance: Money, rate_percent: Percent, periods: u32) -> Money {
    let growth = Decimal::ONE + rate_from_percent(rate_percent);
    balance * growth.powi(periods as i64)
}

/// Closed-form future value of a level contribution stream. Start-of-period
/// timing, so it matches `project` with a zero opening balance.
pub fn annuity_future_value(contribution: Money, rate_percent: Percent, periods: u32) -> Money {
    let rate = rate_from_percent(rate_percent);
    if rate.is_zero() {
        return contribution * Decimal::from(periods);
    }

    let growth = Decimal::ONE + rate;
    contribution * (growth.powi(periods as i64) - Decimal::ONE) / rate * growth
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_periods_returns_opening_balance() {
        let out = project(&ProjectionInput {
            opening_balance: dec!(500_000),
            contribution_per_period: dec!(150_000),
            rate_percent: dec!(7.1),
            periods: 0,
        });
        assert_eq!(out.future_value, dec!(500_000));
        assert_eq!(out.total_contributed, dec!(500_000));
        assert_eq!(out.total_interest, dec!(0));
    }

    #[test]
    fn single_period_credits_contribution_before_interest() {
        // (0 + 100_000) * 1.10 = 110_000
        let out = project(&ProjectionInput {
            opening_balance: Decimal::ZERO,
            contribution_per_period: dec!(100_000),
            rate_percent: dec!(10),
            periods: 1,
        });
        assert_eq!(out.future_value, dec!(110_000));
        assert_eq!(out.total_contributed, dec!(100_000));
        assert_eq!(out.total_interest, dec!(10_000));
    }

    #[test]
    fn negative_rate_is_accepted() {
        // (0 + 1_000) * 0.90 = 900
        let out = project(&ProjectionInput {
            opening_balance: Decimal::ZERO,
            contribution_per_period: dec!(1_000),
            rate_percent: dec!(-10),
            periods: 1,
        });
        assert_eq!(out.future_value, dec!(900));
        assert_eq!(out.total_interest, dec!(-100));
    }

    #[test]
    fn grow_is_plain_compounding() {
        // 1_000 * 1.1^2 = 1_210
        assert_eq!(grow(dec!(1_000), dec!(10), 2), dec!(1210));
        assert_eq!(grow(dec!(1_000), dec!(10), 0), dec!(1_000));
    }

    #[test]
    fn closed_form_matches_loop() {
        for periods in [0u32, 1, 5, 15, 30] {
            let looped = project(&ProjectionInput {
                opening_balance: Decimal::ZERO,
                contribution_per_period: dec!(5_000),
                rate_percent: dec!(8),
                periods,
            })
            .future_value;
            let closed = annuity_future_value(dec!(5_000), dec!(8), periods);

            let scale = looped.abs().max(Decimal::ONE);
            assert!(
                (looped - closed).abs() / scale <= dec!(0.000001),
                "loop {} vs closed form {} at n={}",
                looped,
                closed,
                periods,
            );
        }
    }

    #[test]
    fn closed_form_zero_rate_is_plain_sum() {
        assert_eq!(annuity_future_value(dec!(2_500), Decimal::ZERO, 12), dec!(30_000));
    }
}
