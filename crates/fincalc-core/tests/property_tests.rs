use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fincalc_core::income_tax::hra::exemption_with_rate;
use fincalc_core::income_tax::regimes::RegimeParameters;
use fincalc_core::income_tax::slab::compute_tax;
use fincalc_core::loans::emi::emi;
use fincalc_core::savings::projector::{annuity_future_value, project, ProjectionInput};

fn money(rupees: i64) -> Decimal {
    Decimal::from(rupees)
}

/// Rates in tenths of a percent, so 71 means 7.1%.
fn percent_tenths(tenths: i64) -> Decimal {
    Decimal::new(tenths, 1)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn projection_recomputes_bit_identically(
        opening in 0i64..10_000_000,
        contribution in 0i64..1_000_000,
        rate_tenths in -200i64..300,
        periods in 0u32..=40,
    ) {
        let input = ProjectionInput {
            opening_balance: money(opening),
            contribution_per_period: money(contribution),
            rate_percent: percent_tenths(rate_tenths),
            periods,
        };

        let first = project(&input);
        let second = project(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_periods_is_the_identity(
        opening in -1_000_000i64..10_000_000,
        contribution in 0i64..1_000_000,
        rate_tenths in -200i64..300,
    ) {
        let out = project(&ProjectionInput {
            opening_balance: money(opening),
            contribution_per_period: money(contribution),
            rate_percent: percent_tenths(rate_tenths),
            periods: 0,
        });

        prop_assert_eq!(out.future_value, money(opening));
        prop_assert_eq!(out.total_contributed, money(opening));
        prop_assert_eq!(out.total_interest, Decimal::ZERO);
    }

    #[test]
    fn loop_and_closed_form_agree(
        contribution in 1i64..1_000_000,
        rate_tenths in 1i64..200,
        periods in 0u32..=30,
    ) {
        let looped = project(&ProjectionInput {
            opening_balance: Decimal::ZERO,
            contribution_per_period: money(contribution),
            rate_percent: percent_tenths(rate_tenths),
            periods,
        })
        .future_value;
        let closed = annuity_future_value(money(contribution), percent_tenths(rate_tenths), periods);

        let scale = looped.abs().max(Decimal::ONE);
        prop_assert!(
            (looped - closed).abs() / scale <= dec!(0.000001),
            "loop {} vs closed {}",
            looped,
            closed,
        );
    }

    #[test]
    fn slab_tax_is_monotonic_in_income(
        lower_income in 0i64..3_000_000,
        bump in 0i64..500_000,
    ) {
        let schedule = RegimeParameters::new_regime_fy2024_25().schedule;

        let at_lower = compute_tax(money(lower_income), &schedule, dec!(4), None)
            .unwrap()
            .final_tax;
        let at_higher = compute_tax(money(lower_income + bump), &schedule, dec!(4), None)
            .unwrap()
            .final_tax;

        prop_assert!(at_higher >= at_lower);
    }

    #[test]
    fn hra_exemption_stays_within_bounds(
        basic in 0i64..5_000_000,
        hra in 0i64..2_000_000,
        rent in 0i64..2_000_000,
        city_rate_tenths in 0i64..=500,
    ) {
        let exemption = exemption_with_rate(
            money(basic),
            money(hra),
            money(rent),
            percent_tenths(city_rate_tenths),
        );

        prop_assert!(exemption >= Decimal::ZERO);
        prop_assert!(exemption <= money(hra));
    }

    #[test]
    fn emi_total_repayment_covers_principal(
        principal in 1i64..50_000_000,
        rate_tenths in 0i64..=250,
        term_months in 1u32..=360,
    ) {
        let instalment = emi(money(principal), percent_tenths(rate_tenths), term_months);
        let total = instalment * Decimal::from(term_months);

        // Straight division at a zero rate can truncate in the last decimal
        // place, hence the hair of tolerance.
        prop_assert!(
            total >= money(principal) - dec!(0.0001),
            "total {} below principal {}",
            total,
            principal,
        );
    }
}
