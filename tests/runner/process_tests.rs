// Inspector subprocess runner - real child processes driven through `sh`.

#![cfg(unix)]

use inspectkit_core::{
    CommandRunner, Envelope, InspectorProcess, InvocationError, InvocationOutput,
    InvocationRequest, Method, Target,
};
use serde_json::json;
use std::time::Instant;

fn shell(script: &str) -> InspectorProcess {
    InspectorProcess::new("sh", vec!["-c".to_string(), script.to_string()])
}

fn request(method: Method, timeout_secs: u64) -> InvocationRequest {
    let target = Target::new("python server.py", Some("--port 9000")).expect("target");
    InvocationRequest::new(target, method, timeout_secs)
}

#[tokio::test]
async fn child_receives_the_inspector_argv() {
    // With `sh -c`, the first trailing argument lands in $0.
    let runner = shell(r#"printf '%s\n' "$0" "$@""#);
    let request = request(Method::CallTool("add".to_string()), 5)
        .with_arguments(Some(r#"{"a": 1}"#.to_string()));

    let output = runner.run(&request).await.expect("success");
    let InvocationOutput::Raw { stdout, stderr } = output else {
        panic!("plain text output should fall back to raw");
    };
    let argv: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        argv,
        vec![
            "--cli",
            "python server.py",
            "--port",
            "9000",
            "--method",
            "tools/call/add",
            "--arguments",
            r#"{"a": 1}"#,
        ]
    );
    assert!(stderr.is_empty());
}

#[tokio::test]
async fn raw_output_is_still_a_success() {
    let runner = shell("echo 'not json'; echo 'warming up' >&2");
    let envelope = runner
        .run(&request(Method::ToolsList, 5))
        .await
        .to_envelope();
    assert_eq!(
        envelope,
        json!({
            "success": true,
            "raw_output": "not json\n",
            "stderr": "warming up\n",
        })
    );
}

#[tokio::test]
async fn slow_child_is_killed_at_the_timeout() {
    let runner = shell("sleep 10");
    let started = Instant::now();
    let result = runner.run(&request(Method::ToolsList, 1)).await;

    assert_eq!(result, Err(InvocationError::TimedOut { seconds: 1 }));
    assert!(started.elapsed().as_secs() < 5);
    assert_eq!(
        result.to_envelope(),
        json!({ "success": false, "error": "Command timed out after 1 seconds" })
    );
}

#[tokio::test]
async fn missing_program_is_unexpected() {
    let runner = InspectorProcess::new("inspectkit-no-such-program", Vec::new());
    let result = runner.run(&request(Method::ToolsList, 5)).await;
    match &result {
        Err(err @ InvocationError::Unexpected { .. }) => assert!(!err.is_retryable()),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(
        result.to_envelope()["error"]
            .as_str()
            .expect("error")
            .starts_with("Unexpected error: ")
    );
}
