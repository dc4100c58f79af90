//! CLI-specific error types
//!
//! These end the process with a non-zero exit code. Failures of individual
//! commands inside `serve` are reported as error responses instead.

use std::fmt;
use std::io;

use crate::state::RenameError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Malformed command input
    InvalidInput,
    /// Command refused by the editor core, with the core's own code
    Rejected(&'static str),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "DRAFTLINE_CLI_CONFIG_ERROR",
            Self::IoError => "DRAFTLINE_CLI_IO_ERROR",
            Self::InvalidInput => "DRAFTLINE_CLI_INVALID_INPUT",
            Self::Rejected(code) => *code,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Invalid input
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Rejected by the core
    pub fn rejected(code: &'static str, msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Rejected(code), msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<uuid::Error> for CliError {
    fn from(e: uuid::Error) -> Self {
        Self::invalid_input(format!("Invalid version id: {}", e))
    }
}

impl From<RenameError> for CliError {
    fn from(e: RenameError) -> Self {
        Self::rejected(e.code(), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
