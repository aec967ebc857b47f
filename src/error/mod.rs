//! Unified error handling module
//!
//! Centralizes the crate's error taxonomy: schema lookups that miss the
//! catalog, store operations against a bad name or a failing persistence
//! layer, and the ambient IO/serialization/configuration failures around
//! them. No error is silently swallowed — each surfaces to the caller
//! unchanged.

use crate::schema::SchemaError;
use crate::store::StoreError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PageCraftError {
    /// Errors from the block type catalog and schema validator
    Schema(SchemaError),

    /// Errors from the document store
    Store(StoreError),

    /// Errors related to IO operations
    Io(io::Error),

    /// Errors related to serialization/deserialization
    Serde(serde_json::Error),

    /// Errors related to configuration
    Config(String),
}

impl fmt::Display for PageCraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(err) => write!(f, "Schema error: {}", err),
            Self::Store(err) => write!(f, "Store error: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Serde(err) => write!(f, "Serialization error: {}", err),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PageCraftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<SchemaError> for PageCraftError {
    fn from(error: SchemaError) -> Self {
        PageCraftError::Schema(error)
    }
}

impl From<StoreError> for PageCraftError {
    fn from(error: StoreError) -> Self {
        PageCraftError::Store(error)
    }
}

impl From<io::Error> for PageCraftError {
    fn from(error: io::Error) -> Self {
        PageCraftError::Io(error)
    }
}

impl From<serde_json::Error> for PageCraftError {
    fn from(error: serde_json::Error) -> Self {
        PageCraftError::Serde(error)
    }
}

/// Result type alias for operations that can result in a PageCraftError
pub type PageCraftResult<T> = Result<T, PageCraftError>;
