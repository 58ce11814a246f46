mod command;
mod process;

pub use command::build_argv;
pub use process::InspectorProcess;

use crate::domain::{InvocationResult, Method, Target};
use async_trait::async_trait;

/// Everything needed to launch the inspector once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub target: Target,
    pub method: Method,
    /// Opaque argument blob forwarded as `--arguments`.
    pub arguments: Option<String>,
    pub timeout_secs: u64,
}

impl InvocationRequest {
    pub fn new(target: Target, method: Method, timeout_secs: u64) -> Self {
        Self {
            target,
            method,
            arguments: None,
            timeout_secs,
        }
    }

    pub fn with_arguments(mut self, arguments: Option<String>) -> Self {
        self.arguments = arguments.filter(|blob| !blob.trim().is_empty());
        self
    }
}

/// Executes one inspector invocation and normalises its outcome.
///
/// Implementations spawn at most one process per call and never retry.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, request: &InvocationRequest) -> InvocationResult;
}

#[async_trait]
impl<R> CommandRunner for std::sync::Arc<R>
where
    R: CommandRunner + ?Sized,
{
    async fn run(&self, request: &InvocationRequest) -> InvocationResult {
        (**self).run(request).await
    }
}
