use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::savings::nps::{self, NpsInput};
use fincalc_core::savings::ppf::{self, PpfInput};
use fincalc_core::savings::sip::{self, SipInput};
use fincalc_core::savings::ssy::{self, SsyInput};

use crate::input;

/// Arguments for the PPF projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PpfArgs {
    /// Deposit made at the start of every financial year
    #[arg(long)]
    pub annual_investment: Option<Decimal>,

    /// Balance already accumulated in the account
    #[arg(long, default_value = "0")]
    pub current_balance: Decimal,

    /// Years of the 15-year term already elapsed
    #[arg(long, default_value = "0")]
    pub years_completed: u32,

    /// Scheme rate, percent per annum
    #[arg(long, default_value = "7.1")]
    pub rate: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the SSY projection
#[derive(Args)]
pub struct SsyArgs {
    /// Deposit made at the start of every financial year
    #[arg(long)]
    pub annual_investment: Option<Decimal>,

    /// Balance already accumulated in the account
    #[arg(long, default_value = "0")]
    pub current_balance: Decimal,

    /// Years elapsed since the account was opened
    #[arg(long, default_value = "0")]
    pub years_completed: u32,

    /// Scheme rate, percent per annum
    #[arg(long, default_value = "8.2")]
    pub rate: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the NPS projection
#[derive(Args)]
pub struct NpsArgs {
    /// Contribution made at the start of every month
    #[arg(long)]
    pub monthly_contribution: Option<Decimal>,

    /// Subscriber's current age in years
    #[arg(long)]
    pub current_age: Option<u32>,

    /// Corpus already accumulated in the account
    #[arg(long, default_value = "0")]
    pub current_corpus: Decimal,

    /// Expected growth of the corpus, percent per annum
    #[arg(long, default_value = "10")]
    pub expected_return: Decimal,

    /// Share of the retirement corpus used to buy an annuity
    #[arg(long, default_value = "40")]
    pub annuity_percent: Decimal,

    /// Annuity payout rate, percent per annum on the purchase amount
    #[arg(long, default_value = "6")]
    pub annuity_rate: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the SIP future value
#[derive(Args)]
pub struct SipArgs {
    /// Instalment made at the start of every month
    #[arg(long)]
    pub monthly_investment: Option<Decimal>,

    /// Expected growth, percent per annum
    #[arg(long, default_value = "12")]
    pub expected_return: Decimal,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_ppf(args: PpfArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ppf_input: PpfInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        PpfInput {
            annual_investment: args
                .annual_investment
                .ok_or("--annual-investment is required (or provide --input)")?,
            current_balance: args.current_balance,
            years_completed: args.years_completed,
            rate_percent: args.rate,
        }
    };

    let output = ppf::calculate_ppf(&ppf_input)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_ssy(args: SsyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ssy_input: SsyInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        SsyInput {
            annual_investment: args
                .annual_investment
                .ok_or("--annual-investment is required (or provide --input)")?,
            current_balance: args.current_balance,
            years_completed: args.years_completed,
            rate_percent: args.rate,
        }
    };

    let output = ssy::calculate_ssy(&ssy_input)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_nps(args: NpsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let nps_input: NpsInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        NpsInput {
            monthly_contribution: args
                .monthly_contribution
                .ok_or("--monthly-contribution is required (or provide --input)")?,
            current_age: args
                .current_age
                .ok_or("--current-age is required (or provide --input)")?,
            current_corpus: args.current_corpus,
            expected_return_percent: args.expected_return,
            annuity_percent: args.annuity_percent,
            annuity_rate_percent: args.annuity_rate,
        }
    };

    let output = nps::calculate_nps(&nps_input)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        SipInput {
            monthly_investment: args
                .monthly_investment
                .ok_or("--monthly-investment is required (or provide --input)")?,
            expected_return_percent: args.expected_return,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    let output = sip::calculate_sip(&sip_input)?;
    Ok(serde_json::to_value(&output)?)
}
