//! CLI command implementations
//!
//! Every command opens a session over the file store, applies one or more
//! requests, and prints one JSON response per request. `serve` keeps the
//! session (and so the selection) alive across all lines of stdin.

use std::path::Path;

use serde_json::{json, Value};

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::persistence::{FileStore, KeyValueStore, PersistenceAdapter};
use crate::session::Session;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{error_response, ok_response, read_requests, read_text, write_json};
use super::request::{parse_id, Request};
use super::view::{document_view, versions_view};

/// Parse args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli.config, cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(config_path: &Path, cmd: Command) -> CliResult<()> {
    dispatch(config_path, cmd).map_err(|e| {
        log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        e
    })
}

fn dispatch(config_path: &Path, cmd: Command) -> CliResult<()> {
    let config = Config::load(config_path)?;
    Logger::set_threshold(config.log_severity());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_dir", &config.data_dir), ("storage_key", &config.storage_key)],
    );

    let mut session = open_session(&config);

    match cmd {
        Command::Show => one_shot(&mut session, Request::Show),
        Command::Versions => one_shot(&mut session, Request::Versions),
        Command::Edit { text } => {
            let text = match text {
                Some(text) => text,
                None => read_text()?,
            };
            one_shot(&mut session, Request::Edit { text })
        }
        Command::Save => one_shot(&mut session, Request::Save),
        Command::Rename { id, name } => {
            let id = parse_id(&id)?;
            one_shot(&mut session, Request::Rename { id, name })
        }
        Command::Delete { id } => {
            let id = parse_id(&id)?;
            one_shot(&mut session, Request::Delete { id })
        }
        Command::Restore { id } => {
            let id = parse_id(&id)?;
            if session.select_version(Some(id)).is_none() {
                return Err(CliError::rejected(
                    "VERSION_NOT_FOUND",
                    format!("Version not found: {}", id),
                ));
            }
            one_shot(&mut session, Request::Restore)
        }
        Command::Serve => serve(&mut session),
    }
}

/// Open the configured file-backed session
pub fn open_session(config: &Config) -> Session<FileStore> {
    let store = FileStore::new(config.data_path()).with_quota(config.quota_bytes);
    let adapter = PersistenceAdapter::with_key(store, config.storage_key.clone());
    Session::initialize(adapter)
}

fn one_shot<S: KeyValueStore>(session: &mut Session<S>, request: Request) -> CliResult<()> {
    let data = execute(session, request)?;
    write_json(&respond(session, data))
}

/// Read requests line by line until stdin closes
pub fn serve<S: KeyValueStore>(session: &mut Session<S>) -> CliResult<()> {
    for line in read_requests() {
        let response = match line.and_then(Request::parse) {
            Ok(request) => match execute(session, request) {
                Ok(data) => respond(session, data),
                Err(e) => {
                    session.clear_error();
                    error_response(e.code_str(), e.message())
                }
            },
            Err(e) => error_response(e.code_str(), e.message()),
        };
        write_json(&response)?;
    }

    Ok(())
}

/// Wrap `data`, attaching and then clearing any pending banner message
fn respond<S: KeyValueStore>(session: &mut Session<S>, data: Value) -> Value {
    let response = ok_response(data, session.error());
    session.clear_error();
    response
}

/// Apply one request to the session and describe the result
pub fn execute<S: KeyValueStore>(session: &mut Session<S>, request: Request) -> CliResult<Value> {
    match request {
        Request::Show => Ok(document_view(
            session.document(),
            session.selected_id(),
            session.has_unsaved_changes(),
        )),
        Request::Versions => Ok(versions_view(session.document(), session.selected_id())),
        Request::Edit { text } => {
            session.edit_content(text);
            Ok(json!({ "updatedAt": session.document().updated_at() }))
        }
        Request::Save => {
            let id = session.save_version();
            Ok(json!({
                "id": id,
                "count": session.document().versions().len(),
            }))
        }
        Request::Select { id } => {
            let selected = session.select_version(id).map(|v| v.id());
            Ok(json!({ "selected": selected }))
        }
        Request::Restore => {
            let restored = session.restore_selected();
            Ok(json!({
                "restored": restored,
                "content": session.document().content(),
            }))
        }
        Request::Rename { id, name } => {
            session.rename_version(id, &name)?;
            let stored = session.document().version(id).and_then(|v| v.name());
            Ok(json!({ "id": id, "name": stored }))
        }
        Request::Delete { id } => {
            let deleted = session.delete_version(id);
            Ok(json!({ "deleted": deleted }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use uuid::Uuid;

    fn session() -> Session<MemoryStore> {
        Session::initialize(PersistenceAdapter::new(MemoryStore::new()))
    }

    #[test]
    fn test_edit_save_show() {
        let mut session = session();

        execute(&mut session, Request::Edit { text: "# Hello World".into() }).unwrap();
        let saved = execute(&mut session, Request::Save).unwrap();
        assert_eq!(saved["count"], 1);

        let view = execute(&mut session, Request::Versions).unwrap();
        assert_eq!(view["count"], "1/20");
        assert_eq!(view["versions"][0]["summary"], "# Hello World");
        assert_eq!(view["versions"][0]["label"], "(unnamed)");
    }

    #[test]
    fn test_select_restore() {
        let mut session = session();
        execute(&mut session, Request::Edit { text: "first".into() }).unwrap();
        let saved = execute(&mut session, Request::Save).unwrap();
        let id: Uuid = serde_json::from_value(saved["id"].clone()).unwrap();
        execute(&mut session, Request::Edit { text: "second".into() }).unwrap();

        let selected = execute(&mut session, Request::Select { id: Some(id) }).unwrap();
        assert_eq!(selected["selected"], json!(id));

        let restored = execute(&mut session, Request::Restore).unwrap();
        assert_eq!(restored["restored"], true);
        assert_eq!(restored["content"], "first");
    }

    #[test]
    fn test_rename_rejection_is_error() {
        let mut session = session();
        let id = session.save_version();

        let err = execute(
            &mut session,
            Request::Rename {
                id,
                name: "x".repeat(41),
            },
        )
        .unwrap_err();
        assert_eq!(err.code_str(), "INVALID_LENGTH");
        assert_eq!(err.message(), "Name must be 1–40 characters.");
    }

    #[test]
    fn test_rename_codes_reach_response() {
        let mut session = session();
        let first = session.save_version();
        let second = session.save_version();
        execute(&mut session, Request::Rename { id: first, name: "Draft".into() }).unwrap();

        let err = execute(&mut session, Request::Rename { id: second, name: "draft".into() })
            .unwrap_err();
        assert_eq!(err.code_str(), "DUPLICATE_NAME");

        let missing = Uuid::new_v4();
        let err = execute(&mut session, Request::Rename { id: missing, name: "x".into() })
            .unwrap_err();
        assert_eq!(err.code_str(), "VERSION_NOT_FOUND");
    }

    #[test]
    fn test_rename_reports_stored_name() {
        let mut session = session();
        let id = session.save_version();

        let data = execute(&mut session, Request::Rename { id, name: "\u{feff} Kept ".into() })
            .unwrap();
        assert_eq!(data["name"], "Kept");
    }

    #[test]
    fn test_banner_attached_once() {
        let adapter = PersistenceAdapter::new(MemoryStore::with_quota(1));
        let mut session = Session::initialize(adapter);

        let data = execute(&mut session, Request::Save).unwrap();
        let response = respond(&mut session, data);
        assert!(response["warning"].as_str().unwrap().starts_with("Storage failed"));

        let data = execute(&mut session, Request::Show).unwrap();
        let response = respond(&mut session, data);
        assert!(response.get("warning").is_none());
    }
}
