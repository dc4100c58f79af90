//! CLI Session Tests
//!
//! Drives the command layer against a file-backed session the way the
//! one-shot commands and the serve loop do.

use draftline::cli::{execute, open_session, run_command, Command, Config, Request};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn config_in(temp: &TempDir) -> Config {
    Config {
        data_dir: temp.path().join("data").to_string_lossy().into_owned(),
        ..Config::default()
    }
}

#[test]
fn test_one_shot_commands_share_state_through_disk() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);

    {
        let mut session = open_session(&config);
        execute(&mut session, Request::Edit { text: "# Hello World".into() }).unwrap();
        execute(&mut session, Request::Save).unwrap();
    }

    let mut session = open_session(&config);
    let view = execute(&mut session, Request::Versions).unwrap();
    assert_eq!(view["count"], "1/20");
    assert_eq!(view["versions"][0]["summary"], "# Hello World");
}

#[test]
fn test_serve_style_selection_lives_in_session() {
    let temp = TempDir::new().unwrap();
    let mut session = open_session(&config_in(&temp));

    execute(&mut session, Request::Edit { text: "keep".into() }).unwrap();
    let saved = execute(&mut session, Request::Save).unwrap();
    let id: Uuid = serde_json::from_value(saved["id"].clone()).unwrap();
    execute(&mut session, Request::Edit { text: "scratch".into() }).unwrap();

    execute(&mut session, Request::Select { id: Some(id) }).unwrap();
    let shown = execute(&mut session, Request::Show).unwrap();
    assert_eq!(shown["selected"], json!(id));
    assert_eq!(shown["unsavedChanges"], true);

    execute(&mut session, Request::Delete { id }).unwrap();
    let shown = execute(&mut session, Request::Show).unwrap();
    assert!(shown["selected"].is_null());
    assert_eq!(shown["document"]["content"], "scratch");
}

#[test]
fn test_run_command_with_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("draftline.json");
    let data_dir = temp.path().join("store");
    fs::write(
        &config_path,
        json!({ "data_dir": data_dir, "log_level": "error" }).to_string(),
    )
    .unwrap();

    run_command(&config_path, Command::Edit { text: Some("from cli".into()) }).unwrap();
    run_command(&config_path, Command::Save).unwrap();

    let session = open_session(&Config::load(&config_path).unwrap());
    assert_eq!(session.document().content(), "from cli");
    assert_eq!(session.document().versions().len(), 1);
}

#[test]
fn test_run_command_rejects_bad_id() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("draftline.json");
    fs::write(&config_path, json!({ "data_dir": temp.path().join("d") }).to_string()).unwrap();

    let err = run_command(&config_path, Command::Delete { id: "not-a-uuid".into() }).unwrap_err();
    assert_eq!(err.code_str(), "DRAFTLINE_CLI_INVALID_INPUT");
}

#[test]
fn test_restore_unknown_version_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("draftline.json");
    fs::write(&config_path, json!({ "data_dir": temp.path().join("d") }).to_string()).unwrap();

    let err = run_command(
        &config_path,
        Command::Restore {
            id: Uuid::new_v4().to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(err.code_str(), "VERSION_NOT_FOUND");
}

#[test]
fn test_invalid_config_is_error() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("draftline.json");
    fs::write(&config_path, r#"{"quota_bytes": 0}"#).unwrap();

    let err = run_command(&config_path, Command::Show).unwrap_err();
    assert_eq!(err.code_str(), "DRAFTLINE_CLI_CONFIG_ERROR");
}
