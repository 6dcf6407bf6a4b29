//! Equated monthly installment (EMI) for fixed-rate, fixed-term loans.
//!
//! `compute_emi` is the pure engine: validate, price the level installment,
//! fold the schedule, total it up. `calculate_loan` wraps the same result in
//! the standard computation envelope for outer callers.
//!
//! Numeric envelope: terms are capped at `MAX_TERM_MONTHS`; inside that cap a
//! compounding factor beyond the 96-bit decimal range is reported as
//! `NumericOverflow`, and a schedule whose early repayments are too small for
//! decimal precision to record is reported as `PrecisionLoss` rather than
//! closed by writing off the unpaid balance. No currency rounding is applied
//! anywhere in the engine.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::schedule::{build_schedule, PaymentRecord};
use crate::error::EmiError;
use crate::time_value::level_payment;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::EmiResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);
/// Longest term accepted (500 years).
pub const MAX_TERM_MONTHS: u32 = 6_000;
/// Terms beyond this (30 years) get a warning in the envelope.
const LONG_TERM_WARNING_MONTHS: u32 = 360;
/// Annual rates above this percentage get a warning in the envelope.
const HIGH_RATE_WARNING_PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: Money,
    /// Nominal annual rate as a percentage (5 = 5%).
    pub annual_rate_percent: Decimal,
    /// Term in years; rounded to the nearest whole month.
    pub term_years: Years,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Money,
    /// `monthly_payment * term_months`, not a sum over the schedule.
    pub total_payment: Money,
    pub total_interest: Money,
    pub principal: Money,
    pub term_months: u32,
    pub schedule: Vec<PaymentRecord>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the monthly installment and full amortization schedule.
pub fn compute_emi(input: &LoanInput) -> EmiResult<LoanResult> {
    let months = validate_input(input)?;
    let rate = monthly_rate(input.annual_rate_percent);

    let installment = level_payment(rate, months, input.principal)?;
    let schedule = build_schedule(input.principal, rate, installment, months)?;

    let total_payment = installment
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| EmiError::overflow("total payment"))?;
    let total_interest = total_payment - input.principal;

    Ok(LoanResult {
        monthly_payment: installment,
        total_payment,
        total_interest,
        principal: input.principal,
        term_months: months,
        schedule,
    })
}

/// Run `compute_emi` and wrap the result with methodology, assumptions and
/// envelope warnings.
pub fn calculate_loan(input: &LoanInput) -> EmiResult<ComputationOutput<LoanResult>> {
    let start = Instant::now();
    let result = compute_emi(input)?;
    let warnings = envelope_warnings(input, result.term_months);

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "rate_convention": "nominal annual percentage / 100 / 12, compounded monthly",
        "term_rounding": "term_years * 12 rounded half away from zero",
        "payment_timing": "end of month (ordinary annuity)",
        "precision": "full decimal precision, no currency rounding",
        "closing_tolerance": "final balance within 1e-6 of principal before it is forced to zero"
    });

    Ok(with_metadata(
        "Equated Monthly Installment (level annuity amortization)",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

/// Periodic (monthly) rate from a nominal annual percentage.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / PERCENT / MONTHS_PER_YEAR
}

/// Whole number of months for a term in years, rounded half away from zero.
pub fn term_months(term_years: Years) -> EmiResult<u32> {
    if term_years <= Decimal::ZERO {
        return Err(EmiError::InvalidTerm(format!(
            "Term must be positive, got {term_years} years."
        )));
    }

    let months = term_years
        .checked_mul(MONTHS_PER_YEAR)
        .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|m| m.to_u32())
        .filter(|m| *m <= MAX_TERM_MONTHS)
        .ok_or_else(|| {
            EmiError::InvalidTerm(format!(
                "Term of {term_years} years exceeds the {MAX_TERM_MONTHS}-month limit."
            ))
        })?;

    if months == 0 {
        return Err(EmiError::InvalidTerm(format!(
            "Term of {term_years} years rounds to zero months."
        )));
    }

    Ok(months)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &LoanInput) -> EmiResult<u32> {
    if input.principal <= Decimal::ZERO {
        return Err(EmiError::InvalidPrincipal(format!(
            "Principal must be positive, got {}.",
            input.principal
        )));
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(EmiError::InvalidRate(format!(
            "Annual rate cannot be negative, got {}%.",
            input.annual_rate_percent
        )));
    }
    term_months(input.term_years)
}

fn envelope_warnings(input: &LoanInput, months: u32) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.annual_rate_percent.is_zero() {
        warnings.push("Zero interest rate: installment is principal divided by months.".into());
    }
    if input.annual_rate_percent > HIGH_RATE_WARNING_PERCENT {
        warnings.push(format!(
            "Annual rate {}% is outside the usual range for consumer loans.",
            input.annual_rate_percent
        ));
    }
    if months > LONG_TERM_WARNING_MONTHS {
        warnings.push(format!(
            "Term of {months} months exceeds {LONG_TERM_WARNING_MONTHS}; schedule is long."
        ));
    }
    if Decimal::from(months) != input.term_years * MONTHS_PER_YEAR {
        warnings.push(format!(
            "Term of {} years rounded to {months} whole months.",
            input.term_years
        ));
    }

    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
