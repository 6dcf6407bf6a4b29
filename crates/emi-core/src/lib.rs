pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "summary")]
pub mod summary;

pub use error::EmiError;
pub use types::*;

/// Standard result type for all EMI engine operations
pub type EmiResult<T> = Result<T, EmiError>;
