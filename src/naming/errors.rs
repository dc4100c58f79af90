//! # Naming Errors

use thiserror::Error;

/// Result type for name validation
pub type NamingResult<T> = Result<T, NamingError>;

/// Reasons a proposed version name is refused.
///
/// Display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("Name must be 1–40 characters.")]
    InvalidLength { length: usize },

    #[error("Name must be unique.")]
    DuplicateName { name: String },
}

impl NamingError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            NamingError::InvalidLength { .. } => "INVALID_LENGTH",
            NamingError::DuplicateName { .. } => "DUPLICATE_NAME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            NamingError::InvalidLength { length: 0 }.to_string(),
            "Name must be 1–40 characters."
        );
        assert_eq!(
            NamingError::DuplicateName { name: "Draft".into() }.to_string(),
            "Name must be unique."
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(NamingError::InvalidLength { length: 41 }.code(), "INVALID_LENGTH");
        assert_eq!(NamingError::DuplicateName { name: "x".into() }.code(), "DUPLICATE_NAME");
    }
}
