use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::loans::affordability::{self, CarLoanInput};
use fincalc_core::loans::emi::{self, EmiInput};

use crate::input;

/// Arguments for the EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Interest rate, percent per annum
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the car-loan affordability check
#[derive(Args)]
pub struct CarLoanArgs {
    /// Amount financed after the down payment
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Interest rate, percent per annum
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Household take-home income per month
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Household expenses per month
    #[arg(long, default_value = "0")]
    pub monthly_expenses: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        EmiInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
        }
    };

    let output = emi::calculate_emi(&emi_input)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_car_loan(args: CarLoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: CarLoanInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        CarLoanInput {
            loan_amount: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            monthly_expenses: args.monthly_expenses,
        }
    };

    let output = affordability::calculate_car_loan(&loan_input)?;
    Ok(serde_json::to_value(&output)?)
}
