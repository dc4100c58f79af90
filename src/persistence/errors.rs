//! # Persistence Errors

use thiserror::Error;

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Failures reported by a key-value store or the record codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Storage quota exceeded: {size} bytes (max: {limit})")]
    QuotaExceeded { size: u64, limit: u64 },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PersistenceError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PersistenceError::QuotaExceeded { .. } => "DRAFTLINE_STORAGE_QUOTA_EXCEEDED",
            PersistenceError::Io(_) => "DRAFTLINE_STORAGE_IO_ERROR",
            PersistenceError::Serialization(_) => "DRAFTLINE_STORAGE_SERIALIZATION",
            PersistenceError::Internal(_) => "DRAFTLINE_STORAGE_INTERNAL",
        }
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e.to_string())
    }
}
