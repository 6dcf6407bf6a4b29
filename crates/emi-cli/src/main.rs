mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{CalculateArgs, ScheduleArgs, SummaryArgs};

/// Loan EMI and amortization schedule calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan EMI and amortization schedule calculations",
    long_about = "A CLI for computing the equated monthly installment of a fixed-rate, \
                  fixed-term loan with decimal precision, together with its full \
                  month-by-month amortization schedule and yearly summary."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Round decimal figures in the result to this many places for display
    #[arg(long, global = true)]
    decimals: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the monthly installment, totals and full schedule
    Calculate(CalculateArgs),
    /// Print the month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Headline figures, principal/interest split and yearly totals
    Summary(SummaryArgs),
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
        Commands::Calculate(args) => commands::loan::run_calculate(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Summary(args) => commands::loan::run_summary(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(mut value) => {
            if let Some(dp) = cli.decimals {
                output::round_result(&mut value, dp);
            }
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
