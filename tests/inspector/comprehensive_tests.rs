// Comprehensive test - three sequential probes and the health summary.

#[path = "../support/mod.rs"]
mod support;

use inspectkit_core::{Envelope, Inspector, InvocationError};
use serde_json::json;
use support::{FakeRunner, exit_failure, listing};

#[tokio::test]
async fn probes_run_in_order_with_the_full_timeout_each() {
    let runner = FakeRunner::new()
        .respond("tools/list", listing("tools", 2))
        .respond("resources/list", listing("resources", 1))
        .respond("prompts/list", listing("prompts", 0));
    let inspector = Inspector::new(runner);

    let report = inspector
        .comprehensive_test("node server.js", None, Some(45))
        .await;

    assert_eq!(
        inspector.runner().methods(),
        vec!["tools/list", "resources/list", "prompts/list"]
    );
    assert!(
        inspector
            .runner()
            .calls()
            .iter()
            .all(|call| call.timeout_secs == 45)
    );

    let envelope = report.to_envelope();
    assert_eq!(envelope["success"], json!(true));
    assert_eq!(envelope["server_command"], json!("node server.js"));
    assert_eq!(
        envelope["summary"],
        json!({
            "tools_available": 2,
            "resources_available": 1,
            "prompts_available": 0,
            "overall_status": "healthy",
        })
    );
}

#[tokio::test]
async fn a_failed_probe_does_not_stop_the_others() {
    let runner = FakeRunner::new()
        .respond("tools/list", Err(InvocationError::TimedOut { seconds: 60 }))
        .respond("resources/list", exit_failure(1, "no resources"))
        .respond("prompts/list", listing("prompts", 3));
    let inspector = Inspector::new(runner);

    let envelope = inspector
        .comprehensive_test("node server.js", None, None)
        .await
        .to_envelope();

    assert_eq!(inspector.runner().calls().len(), 3);
    assert_eq!(inspector.runner().calls()[0].timeout_secs, 60);
    assert_eq!(envelope["summary"]["overall_status"], json!("issues_detected"));
    assert_eq!(envelope["summary"]["tools_available"], json!(0));
    assert_eq!(envelope["summary"]["prompts_available"], json!(3));
    assert_eq!(
        envelope["test_results"]["tools_list"]["error"],
        json!("Command timed out after 60 seconds")
    );
}

#[tokio::test]
async fn blank_command_reports_an_error_instead_of_results() {
    let inspector = Inspector::new(FakeRunner::new());
    let envelope = inspector
        .comprehensive_test("   ", None, None)
        .await
        .to_envelope();

    assert!(inspector.runner().calls().is_empty());
    assert_eq!(envelope["success"], json!(false));
    assert!(envelope.get("test_results").is_none());
    assert!(envelope.get("summary").is_none());
    assert!(
        envelope["error"]
            .as_str()
            .expect("error string")
            .starts_with("Comprehensive test failed: ")
    );
}
