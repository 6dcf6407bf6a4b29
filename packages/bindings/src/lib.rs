use napi::Result as NapiResult;
use napi_derive::napi;

use emi_core::amortization::{self, LoanInput};
use emi_core::summary::{self, DEFAULT_PREVIEW_MONTHS};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_loan(input_json: &str) -> NapiResult<LoanInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_emi(input_json: String) -> NapiResult<String> {
    let input = parse_loan(&input_json)?;
    let output = amortization::calculate_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input = parse_loan(&input_json)?;
    let output = amortization::calculate_loan(&input)
        .map_err(to_napi_error)?
        .map(|r| r.schedule);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_summary(input_json: String, preview_months: Option<u32>) -> NapiResult<String> {
    let input = parse_loan(&input_json)?;
    let preview = preview_months
        .map(|m| m as usize)
        .unwrap_or(DEFAULT_PREVIEW_MONTHS);
    let output = amortization::calculate_loan(&input)
        .map_err(to_napi_error)?
        .map(|r| summary::summarize_loan(&r, preview));
    serde_json::to_string(&output).map_err(to_napi_error)
}
