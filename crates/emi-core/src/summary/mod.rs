pub mod breakdown;
pub mod report;
pub mod yearly;

pub use breakdown::{payment_breakdown, schedule_preview, BreakdownSlice, PaymentBreakdown};
pub use report::{summarize_loan, LoanSummary, DEFAULT_PREVIEW_MONTHS};
pub use yearly::{yearly_totals, YearSummary};
