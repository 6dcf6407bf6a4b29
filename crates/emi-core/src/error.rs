use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmiError {
    #[error("Invalid principal: {0}")]
    InvalidPrincipal(String),

    #[error("Invalid interest rate: {0}")]
    InvalidRate(String),

    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    #[error("Numeric overflow in {context}")]
    NumericOverflow { context: String },

    #[error("Precision loss: balance of {residual} left unpaid at month {month}; loan is outside the representable range")]
    PrecisionLoss { month: u32, residual: Decimal },
}

impl EmiError {
    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        EmiError::NumericOverflow {
            context: context.into(),
        }
    }
}
