// Single-target operation tests - method mapping, argument forwarding and
// the logging level context.

#[path = "../support/mod.rs"]
mod support;

use inspectkit_core::{Envelope, Inspector, LogLevel, Method, Target};
use serde_json::json;
use support::{FakeRunner, document, exit_failure};

fn target() -> Target {
    Target::new("python server.py", Some("--port 9000")).expect("target")
}

#[tokio::test]
async fn inspect_lists_tools_with_default_timeout() {
    let inspector = Inspector::new(FakeRunner::new());
    inspector.inspect(&target(), None).await.expect("inspect");

    let calls = inspector.runner().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::ToolsList);
    assert_eq!(calls[0].timeout_secs, inspector.default_timeout_secs());
    assert_eq!(calls[0].target.server_args(), vec!["--port", "9000"]);
}

#[tokio::test]
async fn named_operations_embed_identifiers_verbatim() {
    let inspector = Inspector::new(FakeRunner::new());
    let target = target();

    inspector
        .call_tool(&target, "calculate", Some(r#"{"expression":"2+2"}"#), Some(5))
        .await
        .expect("call tool");
    inspector
        .read_resource(&target, "file:///tmp/a b.txt", None)
        .await
        .expect("read resource");
    inspector
        .get_prompt(&target, "summarize", None, None)
        .await
        .expect("get prompt");
    inspector
        .list_templates(&target, None)
        .await
        .expect("templates");

    assert_eq!(
        inspector.runner().methods(),
        vec![
            "tools/call/calculate",
            "resources/read/file:///tmp/a b.txt",
            "prompts/get/summarize",
            "resources/templates/list",
        ]
    );
    let calls = inspector.runner().calls();
    assert_eq!(calls[0].arguments.as_deref(), Some(r#"{"expression":"2+2"}"#));
    assert_eq!(calls[0].timeout_secs, 5);
    assert_eq!(calls[2].arguments, None);
}

#[tokio::test]
async fn runner_failures_surface_verbatim() {
    let runner = FakeRunner::new().respond("tools/call/explode", exit_failure(2, "boom"));
    let inspector = Inspector::new(runner);
    let envelope = inspector
        .call_tool(&target(), "explode", None, None)
        .await
        .to_envelope();
    assert_eq!(
        envelope,
        json!({
            "success": false,
            "error": "Command failed with exit code 2",
            "exit_code": 2,
            "stdout": "",
            "stderr": "boom",
        })
    );
}

#[tokio::test]
async fn document_fields_are_merged_into_the_envelope() {
    let runner = FakeRunner::new().respond(
        "tools/list",
        document(json!({ "tools": [{ "name": "add" }], "success": "ignored" })),
    );
    let inspector = Inspector::new(runner);
    let envelope = inspector.inspect(&target(), None).await.to_envelope();
    assert_eq!(envelope["success"], json!(true));
    assert_eq!(envelope["tools"][0]["name"], json!("add"));
}

#[test]
fn set_logging_level_normalizes_case() {
    let mut inspector = Inspector::new(FakeRunner::new());
    let envelope = inspector.set_logging_level("debug").to_envelope();
    assert_eq!(
        envelope,
        json!({ "success": true, "message": "Logging level set to DEBUG" })
    );
    assert_eq!(inspector.logging().level(), LogLevel::Debug);
    assert!(inspector.runner().calls().is_empty());
}

#[test]
fn set_logging_level_rejects_unknown_levels() {
    let mut inspector = Inspector::new(FakeRunner::new());
    let envelope = inspector.set_logging_level("verbose").to_envelope();
    assert_eq!(
        envelope,
        json!({
            "success": false,
            "error": "Invalid logging level: verbose. Use DEBUG, INFO, WARNING, or ERROR",
        })
    );
    assert_eq!(inspector.logging().level(), LogLevel::Info);
}
