use serde::{Deserialize, Serialize};

use super::breakdown::{payment_breakdown, schedule_preview, PaymentBreakdown};
use super::yearly::{yearly_totals, YearSummary};
use crate::amortization::{LoanResult, PaymentRecord};
use crate::types::Money;

/// Rows shown before the full schedule is expanded.
pub const DEFAULT_PREVIEW_MONTHS: usize = 12;

/// Headline figures plus the views a results page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub principal: Money,
    pub term_months: u32,
    pub breakdown: PaymentBreakdown,
    pub schedule_preview: Vec<PaymentRecord>,
    pub yearly_totals: Vec<YearSummary>,
}

pub fn summarize_loan(result: &LoanResult, preview_months: usize) -> LoanSummary {
    LoanSummary {
        monthly_payment: result.monthly_payment,
        total_payment: result.total_payment,
        total_interest: result.total_interest,
        principal: result.principal,
        term_months: result.term_months,
        breakdown: payment_breakdown(result),
        schedule_preview: schedule_preview(result, preview_months).to_vec(),
        yearly_totals: yearly_totals(result),
    }
}
