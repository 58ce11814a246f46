// Config store - saving, overwriting and inspecting from saved documents.

#[path = "../support/mod.rs"]
mod support;

use inspectkit_core::config::ConfigStore;
use inspectkit_core::{ConfigStoreError, Envelope, Inspector};
use serde_json::{Value, json};
use std::fs;
use support::FakeRunner;
use tempfile::tempdir;

#[test]
fn save_creates_the_directory_and_reports_the_path() {
    let dir = tempdir().expect("tempdir");
    let store = ConfigStore::new(dir.path().join("nested").join("configs"));

    let saved = store
        .save("python server.py", "weather", Some("--units metric"))
        .expect("save");

    assert!(saved.path.exists());
    assert_eq!(saved.path, store.path_for("weather"));
    let envelope = saved.to_envelope();
    assert_eq!(envelope["success"], json!(true));
    assert_eq!(
        envelope["message"],
        json!(format!("Configuration saved to {}", saved.path.display()))
    );
    assert_eq!(envelope["config"]["server_args"], json!("--units metric"));
    assert_eq!(
        envelope["config"]["created_at"],
        json!(saved.path.display().to_string())
    );
}

#[test]
fn saving_twice_fully_overwrites() {
    let dir = tempdir().expect("tempdir");
    let store = ConfigStore::new(dir.path());

    store
        .save("python old.py", "shared", Some("--legacy"))
        .expect("first save");
    let saved = store.save("node new.js", "shared", None).expect("second save");

    let stored: Value =
        serde_json::from_str(&fs::read_to_string(&saved.path).expect("read")).expect("json");
    assert_eq!(
        stored,
        json!({
            "name": "shared",
            "server_command": "node new.js",
            "server_args": null,
            "created_at": saved.path.display().to_string(),
        })
    );
}

#[test]
fn invalid_names_and_commands_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let store = ConfigStore::new(dir.path());

    let err = store.save("python server.py", "../escape", None).unwrap_err();
    assert!(matches!(err, ConfigStoreError::InvalidName { .. }));
    let err = store.save("  ", "blank", None).unwrap_err();
    assert!(matches!(err, ConfigStoreError::EmptyCommand));
    assert_eq!(fs::read_dir(dir.path()).expect("dir").count(), 0);
}

#[tokio::test]
async fn saved_config_round_trips_into_an_inspection() {
    let dir = tempdir().expect("tempdir");
    let store = ConfigStore::new(dir.path());
    let saved = store
        .save("uv run server.py", "local", Some("--stdio --debug"))
        .expect("save");

    let inspector = Inspector::new(FakeRunner::new());
    let envelope = inspector
        .inspect_with_config(&saved.path, None)
        .await
        .to_envelope();

    let calls = inspector.runner().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].target.command(), "uv run server.py");
    assert_eq!(calls[0].target.args(), Some("--stdio --debug"));
    assert_eq!(envelope["success"], json!(true));
    assert_eq!(envelope["config_used"]["name"], json!("local"));
}

#[tokio::test]
async fn load_failures_never_invoke_the_runner() {
    let dir = tempdir().expect("tempdir");
    let inspector = Inspector::new(FakeRunner::new());

    let missing = dir.path().join("absent.json");
    let envelope = inspector
        .inspect_with_config(&missing, None)
        .await
        .to_envelope();
    assert_eq!(
        envelope,
        json!({
            "success": false,
            "error": format!("Configuration file not found: {}", missing.display()),
        })
    );

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").expect("write");
    let envelope = inspector
        .inspect_with_config(&broken, None)
        .await
        .to_envelope();
    assert_eq!(envelope["error"], json!("Invalid JSON in configuration file"));

    let incomplete = dir.path().join("incomplete.json");
    fs::write(&incomplete, r#"{"name": "x", "server_args": null}"#).expect("write");
    let envelope = inspector
        .inspect_with_config(&incomplete, None)
        .await
        .to_envelope();
    assert_eq!(
        envelope["error"],
        json!("Configuration file missing server_command")
    );

    let listed = dir.path().join("listed.json");
    fs::write(
        &listed,
        r#"{"server_command": "python s.py", "server_args": ["--port", "1"]}"#,
    )
    .expect("write");
    let envelope = inspector
        .inspect_with_config(&listed, None)
        .await
        .to_envelope();
    assert_eq!(
        envelope,
        json!({
            "success": false,
            "error": "Configuration file server_args must be a string or null",
        })
    );

    assert!(inspector.runner().calls().is_empty());
}
