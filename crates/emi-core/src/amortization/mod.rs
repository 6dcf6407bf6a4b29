pub mod emi;
pub mod schedule;

pub use emi::{calculate_loan, compute_emi, monthly_rate, term_months, LoanInput, LoanResult};
pub use schedule::{build_schedule, PaymentRecord};
