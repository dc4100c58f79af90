//! JSON I/O handling for CLI
//!
//! - Input: one JSON object per line via stdin (serve), or plain text (edit)
//! - Output: one JSON object per line via stdout
//! - UTF-8 only

use std::io::{self, BufRead, Read, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Read all of stdin as text
pub fn read_text() -> CliResult<String> {
    let mut text = String::new();
    io::stdin().lock().read_to_string(&mut text)?;
    Ok(text)
}

/// Read JSON requests from stdin, one per line. Blank lines are skipped.
pub fn read_requests() -> impl Iterator<Item = CliResult<Value>> {
    let stdin = io::stdin();
    stdin.lock().lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(serde_json::from_str(&line).map_err(CliError::from)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Success envelope
pub fn ok_response(data: Value, banner: Option<&str>) -> Value {
    let mut response = json!({
        "status": "ok",
        "data": data
    });
    if let Some(banner) = banner {
        response["warning"] = Value::String(banner.to_string());
    }
    response
}

/// Error envelope
pub fn error_response(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write one JSON value as a line to stdout
pub fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
