use super::runner::{CommandRunner, InvocationRequest};
use crate::domain::{Envelope, InvocationResult, Method, Target};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Healthy,
    IssuesDetected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComprehensiveSummary {
    pub tools_available: usize,
    pub resources_available: usize,
    pub prompts_available: usize,
    pub overall_status: OverallStatus,
}

/// Outcome of the three listing probes, in the order they ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResults {
    pub tools_list: InvocationResult,
    pub resources_list: InvocationResult,
    pub prompts_list: InvocationResult,
}

impl ProbeResults {
    pub fn summary(&self) -> ComprehensiveSummary {
        let healthy = self.tools_list.is_ok()
            && self.resources_list.is_ok()
            && self.prompts_list.is_ok();
        ComprehensiveSummary {
            tools_available: available(&self.tools_list, &Method::ToolsList),
            resources_available: available(&self.resources_list, &Method::ResourcesList),
            prompts_available: available(&self.prompts_list, &Method::PromptsList),
            overall_status: if healthy {
                OverallStatus::Healthy
            } else {
                OverallStatus::IssuesDetected
            },
        }
    }
}

fn available(result: &InvocationResult, method: &Method) -> usize {
    match (result, method.listing_field()) {
        (Ok(output), Some(field)) => output.count(field),
        _ => 0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComprehensiveReport {
    pub server_command: String,
    /// `Err` carries the reason the probes could not be attempted.
    pub outcome: Result<ProbeResults, String>,
}

impl ComprehensiveReport {
    pub fn summary(&self) -> Option<ComprehensiveSummary> {
        self.outcome.as_ref().ok().map(ProbeResults::summary)
    }
}

pub(crate) async fn run<R: CommandRunner>(
    runner: &R,
    command: &str,
    args: Option<&str>,
    timeout_secs: u64,
) -> ComprehensiveReport {
    let target = match Target::new(command, args) {
        Ok(target) => target,
        Err(err) => {
            warn!(%err, "Comprehensive test aborted before probing");
            return ComprehensiveReport {
                server_command: command.to_string(),
                outcome: Err(err.to_string()),
            };
        }
    };

    // Each probe gets the full timeout; a failed probe never skips the next.
    let probe = |method: Method| InvocationRequest::new(target.clone(), method, timeout_secs);
    let tools_list = runner.run(&probe(Method::ToolsList)).await;
    let resources_list = runner.run(&probe(Method::ResourcesList)).await;
    let prompts_list = runner.run(&probe(Method::PromptsList)).await;

    let results = ProbeResults {
        tools_list,
        resources_list,
        prompts_list,
    };
    let summary = results.summary();
    info!(
        command,
        tools = summary.tools_available,
        resources = summary.resources_available,
        prompts = summary.prompts_available,
        status = ?summary.overall_status,
        "Comprehensive test finished"
    );

    ComprehensiveReport {
        server_command: command.to_string(),
        outcome: Ok(results),
    }
}

impl Envelope for ComprehensiveReport {
    fn to_envelope(&self) -> Value {
        match &self.outcome {
            Ok(results) => json!({
                "success": true,
                "server_command": self.server_command,
                "test_results": {
                    "tools_list": results.tools_list.to_envelope(),
                    "resources_list": results.resources_list.to_envelope(),
                    "prompts_list": results.prompts_list.to_envelope(),
                },
                "summary": results.summary(),
            }),
            Err(reason) => json!({
                "success": false,
                "server_command": self.server_command,
                "error": format!("Comprehensive test failed: {reason}"),
            }),
        }
    }
}
