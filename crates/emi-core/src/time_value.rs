use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::EmiError;
use crate::types::{Money, Rate};
use crate::EmiResult;

/// Compounding factor `(1 + rate)^periods`.
///
/// Uses integer exponentiation so the factor is exact to decimal precision.
/// Fails with `NumericOverflow` once the factor leaves the 96-bit decimal range.
pub fn compound_factor(rate: Rate, periods: u32) -> EmiResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(u64::from(periods))
        .ok_or_else(|| {
            EmiError::overflow(format!(
                "compound factor (1 + {rate})^{periods}"
            ))
        })
}

/// Level payment that fully amortizes `present_value` over `periods` at `rate`.
///
/// `PMT = PV * r * (1+r)^n / ((1+r)^n - 1)`, returned as a positive amount.
/// A zero rate, or one too small to move the compounding factor off 1, falls
/// back to straight-line `PV / n`.
pub fn level_payment(rate: Rate, periods: u32, present_value: Money) -> EmiResult<Money> {
    if periods == 0 {
        return Err(EmiError::InvalidTerm(
            "Number of periods must be > 0".into(),
        ));
    }

    let n = Decimal::from(periods);
    if rate.is_zero() {
        return Ok(present_value / n);
    }

    let factor = compound_factor(rate, periods)?;
    let annuity_denominator = factor - Decimal::ONE;
    if annuity_denominator.is_zero() {
        return Ok(present_value / n);
    }

    present_value
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(annuity_denominator))
        .ok_or_else(|| EmiError::overflow("level payment"))
}
