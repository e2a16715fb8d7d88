use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankReadinessError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid bank catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown bank code: {0}")]
    UnknownBank(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BankReadinessError {
    fn from(e: serde_json::Error) -> Self {
        BankReadinessError::SerializationError(e.to_string())
    }
}
