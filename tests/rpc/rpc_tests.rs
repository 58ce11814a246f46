// JSON-RPC stdio surface - end-to-end over in-memory streams.

#[path = "../support/mod.rs"]
mod support;

use inspectkit_core::infrastructure::RpcServer;
use inspectkit_core::{ConfigStore, Inspector};
use serde_json::{Value, json};
use support::{FakeRunner, listing};
use tempfile::tempdir;

async fn exchange(server: &mut RpcServer<FakeRunner>, requests: &[Value]) -> Vec<Value> {
    let input: String = requests
        .iter()
        .map(|request| format!("{request}\n"))
        .collect();
    let mut output = Vec::new();
    server
        .serve(input.as_bytes(), &mut output)
        .await
        .expect("serve");
    String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response line"))
        .collect()
}

#[tokio::test]
async fn save_then_inspect_with_config_over_rpc() {
    let dir = tempdir().expect("tempdir");
    let runner = FakeRunner::new().respond("tools/list", listing("tools", 1));
    let mut server = RpcServer::new(Inspector::new(runner), ConfigStore::new(dir.path()));

    let path = dir.path().join("demo.json");
    let responses = exchange(
        &mut server,
        &[
            json!({
                "jsonrpc": "2.0",
                "id": "save",
                "method": "inspector.save_config",
                "params": {
                    "server_command": "python server.py",
                    "config_name": "demo",
                    "server_args": "--stdio",
                },
            }),
            json!({
                "jsonrpc": "2.0",
                "id": "inspect",
                "method": "inspector.inspect_with_config",
                "params": { "config_path": path.display().to_string() },
            }),
        ],
    )
    .await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], json!("save"));
    assert_eq!(responses[0]["result"]["config"]["name"], json!("demo"));
    assert_eq!(responses[1]["result"]["success"], json!(true));
    assert_eq!(responses[1]["result"]["tools"][0]["name"], json!("tools-0"));
    assert_eq!(
        responses[1]["result"]["config_used"]["server_args"],
        json!("--stdio")
    );
    assert_eq!(
        server.inspector().runner().calls()[0].target.args(),
        Some("--stdio")
    );
}

#[tokio::test]
async fn batch_accepts_structured_configs() {
    let dir = tempdir().expect("tempdir");
    let mut server = RpcServer::new(Inspector::new(FakeRunner::new()), ConfigStore::new(dir.path()));

    let responses = exchange(
        &mut server,
        &[json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "inspector.batch_inspect",
            "params": {
                "server_configs": [{ "command": "a" }, { "args": "--x" }],
                "timeout": 3,
            },
        })],
    )
    .await;

    let result = &responses[0]["result"];
    assert_eq!(
        result["summary"],
        json!({ "total_servers": 2, "successful": 1, "failed": 1 })
    );
    assert_eq!(server.inspector().runner().calls()[0].timeout_secs, 3);
}

#[tokio::test]
async fn errors_do_not_stop_the_stream() {
    let dir = tempdir().expect("tempdir");
    let mut server = RpcServer::new(Inspector::new(FakeRunner::new()), ConfigStore::new(dir.path()));

    let input = concat!(
        "this is not json\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"inspector.teleport"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"inspector.comprehensive_test","params":{"server_command":"node s.js"}}"#,
        "\n",
    );
    let mut output = Vec::new();
    server
        .serve(input.as_bytes(), &mut output)
        .await
        .expect("serve");
    let responses: Vec<Value> = String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response line"))
        .collect();

    assert_eq!(responses[0]["error"]["code"], json!(-32700));
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[1]["error"]["code"], json!(-32601));
    assert_eq!(responses[2]["result"]["summary"]["overall_status"], json!("healthy"));
    assert_eq!(server.inspector().runner().calls().len(), 3);
}

#[tokio::test]
async fn guidance_prompt_uses_supplied_arguments() {
    let dir = tempdir().expect("tempdir");
    let mut server = RpcServer::new(Inspector::new(FakeRunner::new()), ConfigStore::new(dir.path()));

    let responses = exchange(
        &mut server,
        &[json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "guidance.prompt",
            "params": {
                "name": "troubleshooting_guide",
                "arguments": { "error_type": "timeout", "server_environment": "docker" },
            },
        })],
    )
    .await;

    let text = responses[0]["result"]["text"].as_str().expect("text");
    assert!(text.contains("Error type: timeout"));
    assert!(text.contains("Environment: docker"));
}
