//! Serve-loop request types
//!
//! One JSON object per line, discriminated by `op`:
//!
//! ```text
//! {"op":"show"}  {"op":"versions"}  {"op":"edit","text":"..."}  {"op":"save"}
//! {"op":"select","id":"<uuid>"|null}  {"op":"restore"}
//! {"op":"rename","id":"<uuid>","name":"..."}  {"op":"delete","id":"<uuid>"}
//! ```

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::errors::{CliError, CliResult};

/// A single command for the editor core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Show,
    Versions,
    Edit { text: String },
    Save,
    Select { id: Option<Uuid> },
    Restore,
    Rename { id: Uuid, name: String },
    Delete { id: Uuid },
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl Request {
    /// Parse a request object
    pub fn parse(value: Value) -> CliResult<Self> {
        let raw: RawRequest = serde_json::from_value(value)
            .map_err(|e| CliError::invalid_input(format!("Invalid request: {}", e)))?;

        match raw.op.as_str() {
            "show" => Ok(Request::Show),
            "versions" => Ok(Request::Versions),
            "edit" => {
                let text = raw
                    .text
                    .ok_or_else(|| CliError::invalid_input("Missing text"))?;
                Ok(Request::Edit { text })
            }
            "save" => Ok(Request::Save),
            "select" => {
                let id = raw.id.as_deref().map(parse_id).transpose()?;
                Ok(Request::Select { id })
            }
            "restore" => Ok(Request::Restore),
            "rename" => {
                let id = parse_id(raw.id.as_deref().unwrap_or_default())?;
                let name = raw
                    .name
                    .ok_or_else(|| CliError::invalid_input("Missing name"))?;
                Ok(Request::Rename { id, name })
            }
            "delete" => {
                let id = parse_id(raw.id.as_deref().unwrap_or_default())?;
                Ok(Request::Delete { id })
            }
            other => Err(CliError::invalid_input(format!("Unknown op: {}", other))),
        }
    }
}

/// Parse a version id
pub fn parse_id(raw: &str) -> CliResult<Uuid> {
    Ok(Uuid::parse_str(raw.trim())?)
}
