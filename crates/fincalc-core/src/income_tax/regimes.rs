use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FincalcError;
use crate::income_tax::slab::{RebateRule, SlabSchedule, TaxSlab};
use crate::types::{Money, Percent};
use crate::FincalcResult;

const HEALTH_EDUCATION_CESS_PERCENT: Decimal = dec!(4);

// ---------------------------------------------------------------------------
// Categorical inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    Old,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "below-60")]
    Below60,
    #[serde(rename = "60-to-80")]
    SixtyToEighty,
    #[serde(rename = "above-80")]
    AboveEighty,
}

// ---------------------------------------------------------------------------
// Parameter sets
// ---------------------------------------------------------------------------

/// Everything the slab engine needs for one regime variant. Shipped as data
/// so a new assessment year is a new table, not a new code path, and fully
/// deserializable so integrators can supply their own versioned tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeParameters {
    pub schedule: SlabSchedule,
    pub cess_rate_percent: Percent,
    pub standard_deduction: Money,
    pub rebate: RebateRule,
}

impl RegimeParameters {
    /// Default parameter set for a regime/age combination. The new regime
    /// does not vary by age.
    pub fn preset(regime: TaxRegime, age_group: AgeGroup) -> Self {
        match regime {
            TaxRegime::Old => Self::old_regime(age_group),
            TaxRegime::New => Self::new_regime_fy2024_25(),
        }
    }

    /// Look up a built-in parameter set by its version string.
    pub fn versioned(version: &str) -> FincalcResult<Self> {
        match version {
            "old-regime-fy2024-25" => Ok(Self::old_regime(AgeGroup::Below60)),
            "old-regime-senior-fy2024-25" => Ok(Self::old_regime(AgeGroup::SixtyToEighty)),
            "old-regime-super-senior-fy2024-25" => Ok(Self::old_regime(AgeGroup::AboveEighty)),
            "new-regime-fy2024-25" => Ok(Self::new_regime_fy2024_25()),
            "new-regime-fy2023-24" => Ok(Self::new_regime_fy2023_24()),
            other => Err(FincalcError::UnknownScheduleVersion(other.to_string())),
        }
    }

    /// Old regime: basic exemption varies with the taxpayer's age group.
    pub fn old_regime(age_group: AgeGroup) -> Self {
        let (version, basic_exemption) = match age_group {
            AgeGroup::Below60 => ("old-regime-fy2024-25", dec!(250_000)),
            AgeGroup::SixtyToEighty => ("old-regime-senior-fy2024-25", dec!(300_000)),
            AgeGroup::AboveEighty => ("old-regime-super-senior-fy2024-25", dec!(500_000)),
        };

        let mut slabs = vec![TaxSlab {
            lower: Decimal::ZERO,
            upper: Some(basic_exemption),
            rate_percent: Decimal::ZERO,
        }];
        // The super-senior exemption swallows the whole 5% band.
        if basic_exemption < dec!(500_000) {
            slabs.push(TaxSlab {
                lower: basic_exemption,
                upper: Some(dec!(500_000)),
                rate_percent: dec!(5),
            });
        }
        slabs.push(TaxSlab {
            lower: dec!(500_000),
            upper: Some(dec!(1_000_000)),
            rate_percent: dec!(20),
        });
        slabs.push(TaxSlab {
            lower: dec!(1_000_000),
            upper: None,
            rate_percent: dec!(30),
        });

        RegimeParameters {
            schedule: SlabSchedule {
                version: version.to_string(),
                slabs,
            },
            cess_rate_percent: HEALTH_EDUCATION_CESS_PERCENT,
            standard_deduction: dec!(50_000),
            rebate: RebateRule {
                threshold: dec!(500_000),
                cap: dec!(12_500),
            },
        }
    }

    /// New regime slabs announced in the July 2024 budget.
    pub fn new_regime_fy2024_25() -> Self {
        RegimeParameters {
            schedule: SlabSchedule {
                version: "new-regime-fy2024-25".to_string(),
                slabs: new_regime_slabs(dec!(700_000), dec!(1_000_000)),
            },
            cess_rate_percent: HEALTH_EDUCATION_CESS_PERCENT,
            standard_deduction: dec!(75_000),
            rebate: RebateRule {
                threshold: dec!(700_000),
                cap: dec!(25_000),
            },
        }
    }

    /// The preceding year's new-regime slabs, kept as a separate version.
    pub fn new_regime_fy2023_24() -> Self {
        RegimeParameters {
            schedule: SlabSchedule {
                version: "new-regime-fy2023-24".to_string(),
                slabs: new_regime_slabs(dec!(600_000), dec!(900_000)),
            },
            cess_rate_percent: HEALTH_EDUCATION_CESS_PERCENT,
            standard_deduction: dec!(50_000),
            rebate: RebateRule {
                threshold: dec!(700_000),
                cap: dec!(25_000),
            },
        }
    }
}

/// The new-regime ladder differs between years only in the 5% and 10% band
/// boundaries.
fn new_regime_slabs(five_percent_upper: Money, ten_percent_upper: Money) -> Vec<TaxSlab> {
    vec![
        TaxSlab {
            lower: Decimal::ZERO,
            upper: Some(dec!(300_000)),
            rate_percent: Decimal::ZERO,
        },
        TaxSlab {
            lower: dec!(300_000),
            upper: Some(five_percent_upper),
            rate_percent: dec!(5),
        },
        TaxSlab {
            lower: five_percent_upper,
            upper: Some(ten_percent_upper),
            rate_percent: dec!(10),
        },
        TaxSlab {
            lower: ten_percent_upper,
            upper: Some(dec!(1_200_000)),
            rate_percent: dec!(15),
        },
        TaxSlab {
            lower: dec!(1_200_000),
            upper: Some(dec!(1_500_000)),
            rate_percent: dec!(20),
        },
        TaxSlab {
            lower: dec!(1_500_000),
            upper: None,
            rate_percent: dec!(30),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
