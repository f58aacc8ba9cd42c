mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::gst::Gstr3bArgs;
use commands::income_tax::{HraArgs, IncomeTaxArgs};
use commands::loans::{CarLoanArgs, EmiArgs};
use commands::savings::{NpsArgs, PpfArgs, SipArgs, SsyArgs};

/// Indian tax and savings-scheme calculators
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Indian tax and savings-scheme calculators",
    long_about = "Decimal-precision calculators for Indian compliance and personal \
                  finance: PPF, SSY, NPS and SIP projections, old/new regime income \
                  tax, HRA exemption, loan EMIs with affordability banding, and \
                  GSTR-3B late-filing penalties."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a PPF balance to the end of its 15-year term
    Ppf(PpfArgs),
    /// Project a Sukanya Samriddhi account to its 21-year maturity
    Ssy(SsyArgs),
    /// Project an NPS corpus and the pension it buys
    Nps(NpsArgs),
    /// Future value of a monthly SIP
    Sip(SipArgs),
    /// Income tax under the old or new regime
    IncomeTax(IncomeTaxArgs),
    /// HRA exemption (least-of-three rule)
    Hra(HraArgs),
    /// Loan EMI from principal, rate and term
    Emi(EmiArgs),
    /// Car loan EMI with affordability banding
    CarLoan(CarLoanArgs),
    /// GSTR-3B late-filing interest and late fee
    Gstr3b(Gstr3bArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Ppf(args) => commands::savings::run_ppf(args),
        Commands::Ssy(args) => commands::savings::run_ssy(args),
        Commands::Nps(args) => commands::savings::run_nps(args),
        Commands::Sip(args) => commands::savings::run_sip(args),
        Commands::IncomeTax(args) => commands::income_tax::run_income_tax(args),
        Commands::Hra(args) => commands::income_tax::run_hra(args),
        Commands::Emi(args) => commands::loans::run_emi(args),
        Commands::CarLoan(args) => commands::loans::run_car_loan(args),
        Commands::Gstr3b(args) => commands::gst::run_gstr3b(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
