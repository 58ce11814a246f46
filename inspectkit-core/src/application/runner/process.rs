use super::command::build_argv;
use super::{CommandRunner, InvocationRequest};
use crate::config::Settings;
use crate::domain::{InvocationError, InvocationOutput, InvocationResult};
use async_trait::async_trait;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Runs the inspector as a child process, one process per request.
#[derive(Debug, Clone)]
pub struct InspectorProcess {
    program: String,
    program_args: Vec<String>,
}

impl InspectorProcess {
    pub fn new(program: impl Into<String>, program_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            program_args,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.program.clone(), settings.program_args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    async fn execute(&self, request: &InvocationRequest) -> InvocationResult {
        if request.timeout_secs == 0 {
            return Err(InvocationError::InvalidTimeout);
        }

        let argv = build_argv(&self.program_args, request);
        debug!(
            program = %self.program,
            args = ?argv,
            timeout_secs = request.timeout_secs,
            "Launching inspector"
        );

        let mut command = Command::new(&self.program);
        command
            .args(&argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command
            .spawn()
            .map_err(|source| InvocationError::Unexpected {
                message: source.to_string(),
            })?;

        // Dropping the pending future on timeout kills the child.
        let output = match timeout(
            Duration::from_secs(request.timeout_secs),
            child.wait_with_output(),
        )
        .await
        {
            Ok(result) => result.map_err(|source| InvocationError::Unexpected {
                message: source.to_string(),
            })?,
            Err(_) => {
                return Err(InvocationError::TimedOut {
                    seconds: request.timeout_secs,
                });
            }
        };

        normalize(output)
    }
}

fn normalize(output: Output) -> InvocationResult {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if output.status.success() {
        Ok(InvocationOutput::from_streams(stdout, stderr))
    } else {
        Err(InvocationError::ExitStatus {
            code: exit_code(&output.status),
            stdout,
            stderr,
        })
    }
}

#[cfg(unix)]
fn exit_code(status: &std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: &std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[async_trait]
impl CommandRunner for InspectorProcess {
    async fn run(&self, request: &InvocationRequest) -> InvocationResult {
        let result = self.execute(request).await;
        match &result {
            Ok(InvocationOutput::Document(_)) => info!(
                command = request.target.command(),
                method = %request.method,
                "Inspector returned a JSON document"
            ),
            Ok(InvocationOutput::Raw { .. }) => warn!(
                command = request.target.command(),
                method = %request.method,
                "Inspector succeeded but stdout was not a JSON object"
            ),
            Err(err) => warn!(
                command = request.target.command(),
                method = %request.method,
                kind = ?err.kind(),
                %err,
                "Inspector invocation failed"
            ),
        }
        result
    }
}
