use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::*;
use crate::FincalcResult;

/// Rent paid is offset by a tenth of basic salary in the third limb.
const RENT_OFFSET_RATE: Decimal = dec!(0.10);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityClass {
    #[serde(rename = "metro")]
    Metro,
    #[serde(rename = "non-metro")]
    NonMetro,
}

impl CityClass {
    /// Share of basic salary that caps the exemption.
    pub fn hra_rate_percent(self) -> Percent {
        match self {
            CityClass::Metro => dec!(50),
            CityClass::NonMetro => dec!(40),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HraInput {
    #[serde(default)]
    pub basic_salary: Money,
    #[serde(default)]
    pub hra_received: Money,
    #[serde(default)]
    pub rent_paid: Money,
    pub city: CityClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HraOutput {
    pub hra_received: Money,
    /// 50% (metro) or 40% (non-metro) of basic salary.
    pub salary_percentage_cap: Money,
    /// Rent paid less a tenth of basic salary, floored at zero.
    pub rent_over_tenth_of_basic: Money,
    pub exemption: Money,
    pub taxable_hra: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Exempt HRA is the least of the three statutory limbs; the rest of the
/// allowance stays taxable.
pub fn calculate_hra_exemption(input: &HraInput) -> FincalcResult<ComputationOutput<HraOutput>> {
    let start = Instant::now();

    let salary_percentage_cap =
        input.basic_salary * rate_from_percent(input.city.hra_rate_percent());
    let rent_over_tenth_of_basic =
        (input.rent_paid - input.basic_salary * RENT_OFFSET_RATE).max(Decimal::ZERO);
    let exemption = input
        .hra_received
        .min(salary_percentage_cap)
        .min(rent_over_tenth_of_basic);

    let output = HraOutput {
        hra_received: input.hra_received,
        salary_percentage_cap,
        rent_over_tenth_of_basic,
        exemption,
        taxable_hra: input.hra_received - exemption,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "city": input.city,
        "salary_cap_percent": input.city.hra_rate_percent().to_string(),
    });

    Ok(with_metadata(
        "HRA exemption (least of three limbs)",
        &assumptions,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// The bare least-of-three rule with a caller-supplied salary cap rate.
pub fn exemption_with_rate(
    basic_salary: Money,
    hra_received: Money,
    rent_paid: Money,
    city_rate_percent: Percent,
) -> Money {
    let salary_cap = basic_salary * rate_from_percent(city_rate_percent);
    let rent_excess = (rent_paid - basic_salary * RENT_OFFSET_RATE).max(Decimal::ZERO);
    hra_received.min(salary_cap).min(rent_excess)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
