pub mod bank_readiness;
pub mod error;
pub mod types;

pub use error::BankReadinessError;
pub use types::*;

/// Standard result type for all bank-readiness operations
pub type BankReadinessResult<T> = Result<T, BankReadinessError>;
