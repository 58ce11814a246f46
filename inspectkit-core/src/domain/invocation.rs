use serde_json::{Map as JsonMap, Value};
use thiserror::Error;

/// Output of an inspector run that exited with status zero.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutput {
    /// Standard output parsed as a JSON object.
    Document(JsonMap<String, Value>),
    /// Standard output that was not a JSON object; kept verbatim.
    Raw { stdout: String, stderr: String },
}

impl InvocationOutput {
    /// Parses inspector stdout, falling back to [`InvocationOutput::Raw`].
    pub fn from_streams(stdout: String, stderr: String) -> Self {
        match serde_json::from_str::<Value>(&stdout) {
            Ok(Value::Object(map)) => InvocationOutput::Document(map),
            _ => InvocationOutput::Raw { stdout, stderr },
        }
    }

    pub fn document(&self) -> Option<&JsonMap<String, Value>> {
        match self {
            InvocationOutput::Document(map) => Some(map),
            InvocationOutput::Raw { .. } => None,
        }
    }

    /// Number of entries in the array stored under `field`; zero when absent.
    pub fn count(&self, field: &str) -> usize {
        self.document()
            .and_then(|map| map.get(field))
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// Error taxonomy shared by every failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The inspector exited with a non-zero status.
    Process,
    /// The inspector did not finish within the timeout.
    Timeout,
    /// Spawning or waiting on the inspector failed.
    Unexpected,
    /// Input was rejected before any process was started.
    Validation,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("Command failed with exit code {code}")]
    ExitStatus {
        code: i32,
        stdout: String,
        stderr: String,
    },
    #[error("Command timed out after {seconds} seconds")]
    TimedOut { seconds: u64 },
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
    #[error("Timeout must be a positive number of seconds")]
    InvalidTimeout,
    #[error("Missing server command")]
    MissingCommand,
    #[error("Invalid server args")]
    InvalidArgs,
    #[error("Invalid server configuration")]
    InvalidConfig,
}

impl InvocationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InvocationError::ExitStatus { .. } => ErrorKind::Process,
            InvocationError::TimedOut { .. } => ErrorKind::Timeout,
            InvocationError::Unexpected { .. } => ErrorKind::Unexpected,
            InvocationError::InvalidTimeout
            | InvocationError::MissingCommand
            | InvocationError::InvalidArgs
            | InvocationError::InvalidConfig => ErrorKind::Validation,
        }
    }

    /// Only timeouts hint that a second attempt with a larger bound may help.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }
}

pub type InvocationResult = Result<InvocationOutput, InvocationError>;
