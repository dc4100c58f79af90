//! Configuration file
//!
//! ```json
//! { "data_dir": "./.draftline",
//!   "storage_key": "prompt-editor:document-state:v1",
//!   "quota_bytes": 5242880,
//!   "log_level": "warn" }
//! ```
//!
//! Every field is optional. A missing file means all defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::document::STORAGE_KEY;
use crate::observability::Severity;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the document record
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Key the document record is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Largest record the store accepts, in bytes
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,

    /// Minimum log severity
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    "./.draftline".to_string()
}
fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}
fn default_quota_bytes() -> u64 {
    5 * 1024 * 1024
} // 5MB
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            quota_bytes: default_quota_bytes(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config: {}",
                    e
                )))
            }
        };

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.quota_bytes == 0 {
            return Err(CliError::config_error("quota_bytes must be > 0"));
        }

        if self.storage_key.trim().is_empty() {
            return Err(CliError::config_error("storage_key must not be empty"));
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Configured log threshold
    pub fn log_severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Warn)
    }
}
