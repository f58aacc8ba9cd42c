use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::gst::late_filing::{self, Gstr3bInput};
use fincalc_core::FincalcError;

use crate::input;

/// Arguments for the GSTR-3B late-filing penalty
#[derive(Args)]
pub struct Gstr3bArgs {
    /// Tax outstanding at the due date
    #[arg(long)]
    pub outstanding_tax: Option<Decimal>,

    /// Statutory due date (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: Option<String>,

    /// Actual filing date (YYYY-MM-DD)
    #[arg(long)]
    pub filing_date: Option<String>,

    /// Annual turnover, used to pick the per-day late fee
    #[arg(long)]
    pub annual_turnover: Option<Decimal>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_gstr3b(args: Gstr3bArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let gst_input: Gstr3bInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_value(data)?
    } else {
        Gstr3bInput {
            outstanding_tax: args.outstanding_tax,
            due_date: parse_date(args.due_date.as_deref())?,
            filing_date: parse_date(args.filing_date.as_deref())?,
            annual_turnover: args.annual_turnover,
        }
    };

    let output = late_filing::calculate_gstr3b_delay(&gst_input)?;
    Ok(serde_json::to_value(&output)?)
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, Box<dyn std::error::Error>> {
    match raw {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Some).map_err(|e| {
            FincalcError::DateError(format!("invalid date '{}': {} (expected YYYY-MM-DD)", s, e))
                .into()
        }),
    }
}
