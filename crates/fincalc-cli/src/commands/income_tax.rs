use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::income_tax::calculator::{self, IncomeTaxInput};
use fincalc_core::income_tax::hra::{self, CityClass, HraInput};
use fincalc_core::income_tax::regimes::{AgeGroup, RegimeParameters, TaxRegime};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RegimeArg {
    Old,
    New,
}

impl From<RegimeArg> for TaxRegime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Old => TaxRegime::Old,
            RegimeArg::New => TaxRegime::New,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AgeGroupArg {
    /// Below 60 years
    General,
    /// 60 to 80 years
    Senior,
    /// Above 80 years
    SuperSenior,
}

impl From<AgeGroupArg> for AgeGroup {
    fn from(arg: AgeGroupArg) -> Self {
        match arg {
            AgeGroupArg::General => AgeGroup::Below60,
            AgeGroupArg::Senior => AgeGroup::SixtyToEighty,
            AgeGroupArg::SuperSenior => AgeGroup::AboveEighty,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CityArg {
    Metro,
    NonMetro,
}

impl From<CityArg> for CityClass {
    fn from(arg: CityArg) -> Self {
        match arg {
            CityArg::Metro => CityClass::Metro,
            CityArg::NonMetro => CityClass::NonMetro,
        }
    }
}

/// Arguments for the income-tax calculation
#[derive(Args)]
pub struct IncomeTaxArgs {
    /// Gross annual income before deductions
    #[arg(long)]
    pub gross_income: Option<Decimal>,

    /// Tax regime
    #[arg(long, value_enum, default_value = "new")]
    pub regime: RegimeArg,

    /// Age group (affects the old-regime basic exemption)
    #[arg(long, value_enum, default_value = "general")]
    pub age_group: AgeGroupArg,

    /// Chapter VI-A deductions (80C, 80D, ...), old regime only
    #[arg(long, default_value = "0")]
    pub deductions: Decimal,

    /// Path to a JSON or YAML file with a full regime parameter set
    #[arg(long)]
    pub params: Option<String>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the HRA exemption
#[derive(Args)]
pub struct HraArgs {
    /// Annual basic salary
    #[arg(long)]
    pub basic_salary: Option<Decimal>,

    /// HRA received over the year
    #[arg(long)]
    pub hra_received: Option<Decimal>,

    /// Rent actually paid over the year
    #[arg(long)]
    pub rent_paid: Option<Decimal>,

    /// City class: metro caps at 50% of basic, non-metro at 40%
    #[arg(long, value_enum, default_value = "metro")]
    pub city: CityArg,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_income_tax(args: IncomeTaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: IncomeTaxInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        let params: Option<RegimeParameters> = match args.params {
            Some(ref path) => Some(input::file::read_structured(path)?),
            None => None,
        };
        IncomeTaxInput {
            gross_income: args
                .gross_income
                .ok_or("--gross-income is required (or provide --input)")?,
            regime: args.regime.into(),
            age_group: args.age_group.into(),
            deductions: args.deductions,
            params,
        }
    };

    let output = calculator::calculate_income_tax(&tax_input)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_hra(args: HraArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let hra_input: HraInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        HraInput {
            basic_salary: args
                .basic_salary
                .ok_or("--basic-salary is required (or provide --input)")?,
            hra_received: args
                .hra_received
                .ok_or("--hra-received is required (or provide --input)")?,
            rent_paid: args
                .rent_paid
                .ok_or("--rent-paid is required (or provide --input)")?,
            city: args.city.into(),
        }
    };

    let output = hra::calculate_hra_exemption(&hra_input)?;
    Ok(serde_json::to_value(&output)?)
}
