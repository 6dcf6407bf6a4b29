use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::LoanResult;
use crate::types::Money;

const MONTHS_PER_YEAR: usize = 12;

/// Totals for one loan year (months 1-12 are year 1, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub months: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub total_paid: Money,
    pub closing_balance: Money,
}

/// Roll the monthly schedule up into loan years. The final year is partial
/// when the term is not a whole number of years.
pub fn yearly_totals(result: &LoanResult) -> Vec<YearSummary> {
    result
        .schedule
        .chunks(MONTHS_PER_YEAR)
        .enumerate()
        .map(|(i, rows)| {
            let principal_paid: Money = rows.iter().map(|r| r.principal_portion).sum();
            let interest_paid: Money = rows.iter().map(|r| r.interest_portion).sum();
            YearSummary {
                year: i as u32 + 1,
                months: rows.len() as u32,
                principal_paid,
                interest_paid,
                total_paid: principal_paid + interest_paid,
                closing_balance: rows
                    .last()
                    .map(|r| r.remaining_balance)
                    .unwrap_or(Decimal::ZERO),
            }
        })
        .collect()
}
