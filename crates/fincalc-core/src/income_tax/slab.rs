use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FincalcError;
use crate::types::{rate_from_percent, Money, Percent};
use crate::FincalcResult;

// ---------------------------------------------------------------------------
// Schedule types
// ---------------------------------------------------------------------------

/// One progressive bracket: income in [lower, upper) taxed at `rate_percent`.
/// `upper = None` marks the open-ended top slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Money>,
    pub rate_percent: Percent,
}

/// An ordered, contiguous slab table. Treated as external, versioned
/// configuration rather than code: a new assessment year is a new table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabSchedule {
    pub version: String,
    pub slabs: Vec<TaxSlab>,
}

/// Section-87A-shaped rebate: forgiveness up to `cap` for taxable income at
/// or below `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebateRule {
    pub threshold: Money,
    pub cap: Money,
}

/// Tax attributable to a single slab, for display breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabTax {
    pub lower: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Money>,
    pub rate_percent: Percent,
    pub taxable_in_slab: Money,
    pub tax_on_slab: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxComputation {
    pub taxable_income: Money,
    pub tax: Money,
    pub cess: Money,
    pub rebate: Money,
    pub final_tax: Money,
    pub slabwise: Vec<SlabTax>,
}

impl SlabSchedule {
    /// Reject schedules a progressive computation cannot iterate safely:
    /// unordered bounds, gaps, overlaps, or a slab after the open-ended one.
    pub fn validate(&self) -> FincalcResult<()> {
        if self.slabs.is_empty() {
            return Err(FincalcError::MalformedSchedule(format!(
                "schedule '{}' has no slabs",
                self.version
            )));
        }

        let mut expected_lower = self.slabs[0].lower;
        for (i, slab) in self.slabs.iter().enumerate() {
            if slab.lower != expected_lower {
                return Err(FincalcError::MalformedSchedule(format!(
                    "schedule '{}': slab {} starts at {} but the previous slab ends at {}",
                    self.version, i, slab.lower, expected_lower
                )));
            }
            match slab.upper {
                Some(upper) if upper <= slab.lower => {
                    return Err(FincalcError::MalformedSchedule(format!(
                        "schedule '{}': slab {} has upper bound {} at or below its lower bound {}",
                        self.version, i, upper, slab.lower
                    )));
                }
                Some(upper) => expected_lower = upper,
                None => {
                    if i + 1 != self.slabs.len() {
                        return Err(FincalcError::MalformedSchedule(format!(
                            "schedule '{}': open-ended slab {} is not the last slab",
                            self.version, i
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Progressive tax over a slab schedule, plus cess and an optional rebate.
///
/// Income exactly on a boundary is taxed at the lower bracket for the
/// boundary amount (inclusive-lower / exclusive-upper). Negative income
/// clamps to zero; only a malformed schedule errors.
pub fn compute_tax(
    taxable_income: Money,
    schedule: &SlabSchedule,
    cess_rate_percent: Percent,
    rebate: Option<&RebateRule>,
) -> FincalcResult<TaxComputation> {
    schedule.validate()?;

    let income = taxable_income.max(Decimal::ZERO);

    let mut tax = Decimal::ZERO;
    let mut slabwise = Vec::with_capacity(schedule.slabs.len());
    for slab in &schedule.slabs {
        let ceiling = slab.upper.unwrap_or(Decimal::MAX).min(income);
        let taxable_in_slab = (ceiling - slab.lower).max(Decimal::ZERO);
        let tax_on_slab = taxable_in_slab * rate_from_percent(slab.rate_percent);
        tax += tax_on_slab;
        slabwise.push(SlabTax {
            lower: slab.lower,
            upper: slab.upper,
            rate_percent: slab.rate_percent,
            taxable_in_slab,
            tax_on_slab,
        });
    }

    let cess = tax * rate_from_percent(cess_rate_percent);

    let rebate_amount = match rebate {
        Some(rule) if income <= rule.threshold => (tax + cess).min(rule.cap),
        _ => Decimal::ZERO,
    };

    let final_tax = (tax + cess - rebate_amount).max(Decimal::ZERO);

    Ok(TaxComputation {
        taxable_income: income,
        tax,
        cess,
        rebate: rebate_amount,
        final_tax,
        slabwise,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn three_band_schedule() -> SlabSchedule {
        SlabSchedule {
            version: "test".into(),
            slabs: vec![
                TaxSlab {
                    lower: dec!(0),
                    upper: Some(dec!(250_000)),
                    rate_percent: dec!(0),
                },
                TaxSlab {
                    lower: dec!(250_000),
                    upper: Some(dec!(500_000)),
                    rate_percent: dec!(5),
                },
                TaxSlab {
                    lower: dec!(500_000),
                    upper: None,
                    rate_percent: dec!(20),
                },
            ],
        }
    }

    #[test]
    fn marginal_rates_apply_per_slab() {
        // 250_000 * 5% + 100_000 * 20% = 12_500 + 20_000 = 32_500
        let c = compute_tax(dec!(600_000), &three_band_schedule(), dec!(0), None).unwrap();
        assert_eq!(c.tax, dec!(32_500));
        assert_eq!(c.final_tax, dec!(32_500));
        assert_eq!(c.slabwise[0].tax_on_slab, dec!(0));
        assert_eq!(c.slabwise[1].tax_on_slab, dec!(12_500));
        assert_eq!(c.slabwise[2].tax_on_slab, dec!(20_000));
    }

    #[test]
    fn boundary_income_is_taxed_in_the_lower_bracket() {
        // Exactly 500_000: the 20% band gets nothing.
        let at_boundary = compute_tax(dec!(500_000), &three_band_schedule(), dec!(0), None).unwrap();
        assert_eq!(at_boundary.tax, dec!(12_500));
        assert_eq!(at_boundary.slabwise[2].taxable_in_slab, dec!(0));

        // One rupee above picks up the marginal rate only on that rupee.
        let just_above = compute_tax(dec!(500_001), &three_band_schedule(), dec!(0), None).unwrap();
        assert_eq!(just_above.tax, dec!(12_500.20));
    }

    #[test]
    fn cess_applies_after_slab_summation() {
        let c = compute_tax(dec!(600_000), &three_band_schedule(), dec!(4), None).unwrap();
        // 4% of 32_500 = 1_300
        assert_eq!(c.cess, dec!(1_300));
        assert_eq!(c.final_tax, dec!(33_800));
    }

    #[test]
    fn rebate_wipes_small_liability_below_threshold() {
        let rule = RebateRule {
            threshold: dec!(500_000),
            cap: dec!(12_500),
        };
        let c = compute_tax(dec!(400_000), &three_band_schedule(), dec!(0), Some(&rule)).unwrap();
        // 150_000 * 5% = 7_500, fully rebated.
        assert_eq!(c.tax, dec!(7_500));
        assert_eq!(c.rebate, dec!(7_500));
        assert_eq!(c.final_tax, dec!(0));
    }

    #[test]
    fn rebate_cap_limits_the_forgiveness() {
        let rule = RebateRule {
            threshold: dec!(500_000),
            cap: dec!(10_000),
        };
        let c = compute_tax(dec!(500_000), &three_band_schedule(), dec!(0), Some(&rule)).unwrap();
        assert_eq!(c.tax, dec!(12_500));
        assert_eq!(c.rebate, dec!(10_000));
        assert_eq!(c.final_tax, dec!(2_500));
    }

    #[test]
    fn rebate_does_not_apply_above_threshold() {
        let rule = RebateRule {
            threshold: dec!(500_000),
            cap: dec!(12_500),
        };
        let c = compute_tax(dec!(500_001), &three_band_schedule(), dec!(0), Some(&rule)).unwrap();
        assert_eq!(c.rebate, dec!(0));
    }

    #[test]
    fn negative_income_clamps_to_zero() {
        let c = compute_tax(dec!(-100_000), &three_band_schedule(), dec!(4), None).unwrap();
        assert_eq!(c.taxable_income, dec!(0));
        assert_eq!(c.final_tax, dec!(0));
    }

    #[test]
    fn gap_in_schedule_is_rejected() {
        let schedule = SlabSchedule {
            version: "broken".into(),
            slabs: vec![
                TaxSlab {
                    lower: dec!(0),
                    upper: Some(dec!(250_000)),
                    rate_percent: dec!(0),
                },
                TaxSlab {
                    lower: dec!(300_000),
                    upper: None,
                    rate_percent: dec!(5),
                },
            ],
        };
        assert!(matches!(
            compute_tax(dec!(100_000), &schedule, dec!(0), None),
            Err(FincalcError::MalformedSchedule(_))
        ));
    }

    #[test]
    fn slab_after_open_ended_slab_is_rejected() {
        let schedule = SlabSchedule {
            version: "broken".into(),
            slabs: vec![
                TaxSlab {
                    lower: dec!(0),
                    upper: None,
                    rate_percent: dec!(0),
                },
                TaxSlab {
                    lower: dec!(250_000),
                    upper: None,
                    rate_percent: dec!(5),
                },
            ],
        };
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn empty_schedule_is_rejected() {
        let schedule = SlabSchedule {
            version: "empty".into(),
            slabs: Vec::new(),
        };
        assert!(schedule.validate().is_err());
    }
}
