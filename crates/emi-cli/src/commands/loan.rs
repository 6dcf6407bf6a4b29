use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_core::amortization;
use emi_core::summary::{self, DEFAULT_PREVIEW_MONTHS};

use crate::input::{self, LoanFlags};

/// Loan terms shared by every loan subcommand
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long, alias = "amount", allow_hyphen_values = true)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (5 = 5%)
    #[arg(long, alias = "annual-rate", allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Loan term in years (rounded to whole months)
    #[arg(long, alias = "term", allow_hyphen_values = true)]
    pub years: Option<Decimal>,
}

impl LoanArgs {
    fn flags(&self) -> LoanFlags<'_> {
        LoanFlags {
            input: self.input.as_deref(),
            principal: self.principal,
            rate: self.rate,
            years: self.years,
        }
    }
}

/// Arguments for the full EMI calculation
#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Only print the first N months
    #[arg(long)]
    pub months: Option<usize>,
}

/// Arguments for the loan summary
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Number of schedule rows to include in the preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_MONTHS)]
    pub preview_months: usize,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = input::resolve_loan(args.loan.flags())?;
    let result = amortization::calculate_loan(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = input::resolve_loan(args.loan.flags())?;
    let months = args.months;
    let result = amortization::calculate_loan(&loan)?.map(|r| match months {
        Some(n) => summary::schedule_preview(&r, n).to_vec(),
        None => r.schedule,
    });
    Ok(serde_json::to_value(result)?)
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = input::resolve_loan(args.loan.flags())?;
    let preview = args.preview_months;
    let result = amortization::calculate_loan(&loan)?
        .map(|r| summary::summarize_loan(&r, preview));
    Ok(serde_json::to_value(result)?)
}
