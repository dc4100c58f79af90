//! # State Errors

use thiserror::Error;
use uuid::Uuid;

use crate::naming::NamingError;

/// Result type for rename
pub type RenameResult<T> = Result<T, RenameError>;

/// Why a rename left the document unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error(transparent)]
    Invalid(#[from] NamingError),

    #[error("Version not found: {0}")]
    NotFound(Uuid),
}

impl RenameError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            RenameError::Invalid(e) => e.code(),
            RenameError::NotFound(_) => "VERSION_NOT_FOUND",
        }
    }
}
