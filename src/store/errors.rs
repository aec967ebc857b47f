use thiserror::Error;

/// Result type for document store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error types for document store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The caller asked for a document name outside `draft`/`published`.
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// The persistence layer failed; the next call re-attempts, no retry or
    /// cached fallback here.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Unavailable(format!("document encoding failed: {}", err))
    }
}
