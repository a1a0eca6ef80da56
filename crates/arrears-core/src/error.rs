use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrearsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Data source failure: {0}")]
    DataSource(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ArrearsError {
    fn from(e: serde_json::Error) -> Self {
        ArrearsError::SerializationError(e.to_string())
    }
}
