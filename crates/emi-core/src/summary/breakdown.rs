use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::{LoanResult, PaymentRecord};
use crate::types::{Money, Rate};

/// One slice of the principal-vs-interest split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub amount: Money,
    /// Fraction of total payment (0..=1).
    pub share: Rate,
}

/// Two-slice split of everything paid over the loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub principal: BreakdownSlice,
    pub interest: BreakdownSlice,
}

/// Split total payment into principal and interest, with shares.
///
/// Interest is floored at zero: a zero-rate loan can total a hair under the
/// principal once the installment is multiplied back out.
pub fn payment_breakdown(result: &LoanResult) -> PaymentBreakdown {
    let principal = result.principal;
    let interest = result.total_interest.max(Decimal::ZERO);
    let total = principal + interest;

    let principal_share = if total.is_zero() {
        Decimal::ZERO
    } else {
        principal / total
    };

    PaymentBreakdown {
        principal: BreakdownSlice {
            label: "principal".into(),
            amount: principal,
            share: principal_share,
        },
        interest: BreakdownSlice {
            label: "interest".into(),
            amount: interest,
            share: Decimal::ONE - principal_share,
        },
    }
}

/// The first `months` rows of the schedule, or all of it if shorter.
pub fn schedule_preview(result: &LoanResult, months: usize) -> &[PaymentRecord] {
    let end = months.min(result.schedule.len());
    &result.schedule[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::{compute_emi, LoanInput};
    use rust_decimal_macros::dec;

    fn result_for(principal: Decimal, rate: Decimal, years: Decimal) -> LoanResult {
        compute_emi(&LoanInput {
            principal,
            annual_rate_percent: rate,
            term_years: years,
        })
        .unwrap()
    }

    #[test]
    fn test_breakdown_shares_sum_to_one() {
        let result = result_for(dec!(100_000), dec!(5), dec!(10));
        let b = payment_breakdown(&result);
        assert_eq!(b.principal.share + b.interest.share, Decimal::ONE);
        assert_eq!(b.principal.amount, dec!(100_000));
        // ~27.28k of interest on 127.28k total
        assert!((b.interest.share - dec!(0.2143)).abs() < dec!(0.001), "got {}", b.interest.share);
    }

    #[test]
    fn test_breakdown_zero_rate_has_no_interest() {
        let result = result_for(dec!(50_000), Decimal::ZERO, dec!(5));
        let b = payment_breakdown(&result);
        assert_eq!(b.interest.amount, Decimal::ZERO);
        assert_eq!(b.principal.share, Decimal::ONE);
        assert_eq!(b.interest.share, Decimal::ZERO);
    }

    #[test]
    fn test_preview_first_year() {
        let result = result_for(dec!(100_000), dec!(5), dec!(10));
        let preview = schedule_preview(&result, 12);
        assert_eq!(preview.len(), 12);
        assert_eq!(preview[0].month, 1);
        assert_eq!(preview[11].month, 12);
    }

    #[test]
    fn test_preview_longer_than_schedule() {
        let result = result_for(dec!(1_000), dec!(5), dec!(0.5));
        assert_eq!(schedule_preview(&result, 12).len(), 6);
        assert!(schedule_preview(&result, 0).is_empty());
    }
}
