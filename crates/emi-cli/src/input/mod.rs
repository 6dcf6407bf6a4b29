pub mod stdin;

use emi_core::amortization::LoanInput;
use rust_decimal::Decimal;
use std::fs;
use std::io::ErrorKind;

/// Loan terms as they arrive on the command line.
pub struct LoanFlags<'a> {
    pub input: Option<&'a str>,
    pub principal: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub years: Option<Decimal>,
}

/// Resolve the loan from `--input`, then piped stdin, then individual flags.
pub fn resolve_loan(flags: LoanFlags<'_>) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(path) = flags.input {
        return read_loan_file(path);
    }
    if let Some(loan) = stdin::read_piped_json::<LoanInput>()? {
        return Ok(loan);
    }

    Ok(LoanInput {
        principal: flags
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate_percent: flags
            .rate
            .ok_or("--rate is required (or provide --input)")?,
        term_years: flags
            .years
            .ok_or("--years is required (or provide --input)")?,
    })
}

/// Load loan terms from a JSON file with `principal`, `annual_rate_percent`
/// and `term_years`.
fn read_loan_file(path: &str) -> Result<LoanInput, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => format!("File not found: {path}"),
        _ => format!("Cannot read loan file '{path}': {e}"),
    })?;
    let loan = serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid loan terms in '{path}': {e}"))?;
    Ok(loan)
}
