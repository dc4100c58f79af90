//! CLI module for Draftline
//!
//! The trigger layer around the editor core:
//! - one-shot commands: show, edit, save, versions, rename, delete, restore
//! - serve: line-oriented JSON command loop over stdin/stdout

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod request;
mod view;

pub use args::{Cli, Command};
pub use commands::{execute, open_session, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, read_requests, write_json};
pub use request::{parse_id, Request};
pub use view::{document_view, versions_view, VersionRow};
