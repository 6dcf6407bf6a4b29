use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::types::{Money, Rate};
use crate::EmiResult;

/// Largest balance, relative to principal, that may be written off when the
/// schedule is forced closed.
const CLOSING_TOLERANCE: Decimal = dec!(0.000001);

/// One month of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// 1-based month number.
    pub month: u32,
    /// Fixed installment, identical on every row of a schedule.
    pub installment: Money,
    /// Part of the installment that reduces the outstanding balance.
    pub principal_portion: Money,
    /// Interest on the balance carried into this month.
    pub interest_portion: Money,
    /// Balance after this payment, never negative.
    pub remaining_balance: Money,
}

/// Fold the balance forward one month at a time.
///
/// Interest accrues on the opening balance; whatever is left of the
/// installment repays principal. The balance is forced to zero on the final
/// month, and earlier if drift would push it below zero, so the loan closes
/// exactly at `months`. Forcing it closed only absorbs rounding residue: a
/// residual above `CLOSING_TOLERANCE * principal` means decimal precision
/// could not carry the early repayments and fails with `PrecisionLoss`.
pub fn build_schedule(
    principal: Money,
    monthly_rate: Rate,
    installment: Money,
    months: u32,
) -> EmiResult<Vec<PaymentRecord>> {
    let tolerance = principal.abs() * CLOSING_TOLERANCE;
    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        let interest_portion = balance * monthly_rate;
        let principal_portion = installment - interest_portion;
        balance -= principal_portion;

        if month == months || balance < Decimal::ZERO {
            if balance.abs() > tolerance {
                return Err(EmiError::PrecisionLoss {
                    month,
                    residual: balance,
                });
            }
            balance = Decimal::ZERO;
        }

        schedule.push(PaymentRecord {
            month,
            installment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}
