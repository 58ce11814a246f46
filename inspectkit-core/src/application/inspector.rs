use super::batch::{self, BatchError, BatchPlan, BatchReport};
use super::comprehensive::{self, ComprehensiveReport};
use super::logging::{LogLevel, LoggingContext, LoggingError};
use super::runner::{CommandRunner, InvocationRequest};
use crate::config::{ConfigStore, ConfigStoreError, Settings};
use crate::constants::{DEFAULT_COMPREHENSIVE_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::domain::envelope::envelope_fields;
use crate::domain::{Envelope, InvocationResult, Method, Target};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Single-target operations over a [`CommandRunner`].
///
/// Each operation maps one intent to exactly one runner call; names and
/// argument blobs are forwarded without validation.
#[derive(Debug)]
pub struct Inspector<R> {
    runner: R,
    logging: LoggingContext,
    default_timeout_secs: u64,
    comprehensive_timeout_secs: u64,
}

impl<R: CommandRunner> Inspector<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            logging: LoggingContext::default(),
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
            comprehensive_timeout_secs: DEFAULT_COMPREHENSIVE_TIMEOUT_SECS,
        }
    }

    pub fn from_settings(runner: R, settings: &Settings) -> Self {
        Self {
            runner,
            logging: LoggingContext::new(settings.log_level),
            default_timeout_secs: settings.default_timeout_secs,
            comprehensive_timeout_secs: settings.comprehensive_timeout_secs,
        }
    }

    pub fn with_logging(mut self, logging: LoggingContext) -> Self {
        self.logging = logging;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn logging(&self) -> &LoggingContext {
        &self.logging
    }

    pub fn default_timeout_secs(&self) -> u64 {
        self.default_timeout_secs
    }

    async fn invoke(
        &self,
        target: &Target,
        method: Method,
        arguments: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> InvocationResult {
        let request = InvocationRequest::new(
            target.clone(),
            method,
            timeout_secs.unwrap_or(self.default_timeout_secs),
        )
        .with_arguments(arguments.map(str::to_string));
        debug!(
            command = target.command(),
            method = %request.method,
            timeout_secs = request.timeout_secs,
            "Dispatching inspector request"
        );
        self.runner.run(&request).await
    }

    /// Discovers the target's capabilities with one listing call.
    pub async fn inspect(&self, target: &Target, timeout_secs: Option<u64>) -> InvocationResult {
        self.invoke(target, Method::ToolsList, None, timeout_secs)
            .await
    }

    pub async fn call_tool(
        &self,
        target: &Target,
        tool: &str,
        arguments: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> InvocationResult {
        self.invoke(
            target,
            Method::CallTool(tool.to_string()),
            arguments,
            timeout_secs,
        )
        .await
    }

    pub async fn read_resource(
        &self,
        target: &Target,
        uri: &str,
        timeout_secs: Option<u64>,
    ) -> InvocationResult {
        self.invoke(
            target,
            Method::ReadResource(uri.to_string()),
            None,
            timeout_secs,
        )
        .await
    }

    pub async fn get_prompt(
        &self,
        target: &Target,
        prompt: &str,
        arguments: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> InvocationResult {
        self.invoke(
            target,
            Method::GetPrompt(prompt.to_string()),
            arguments,
            timeout_secs,
        )
        .await
    }

    pub async fn list_templates(
        &self,
        target: &Target,
        timeout_secs: Option<u64>,
    ) -> InvocationResult {
        self.invoke(target, Method::ResourceTemplatesList, None, timeout_secs)
            .await
    }

    /// Local only; never spawns the inspector.
    pub fn set_logging_level(&mut self, level: &str) -> Result<LogLevel, LoggingError> {
        self.logging.set_level(level)
    }

    pub async fn comprehensive_test(
        &self,
        command: &str,
        args: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> ComprehensiveReport {
        let timeout_secs = timeout_secs.unwrap_or(self.comprehensive_timeout_secs);
        info!(command, timeout_secs, "Running comprehensive server test");
        comprehensive::run(&self.runner, command, args, timeout_secs).await
    }

    /// Inspects every entry of a JSON array of `{command, args?}` objects.
    pub async fn batch_inspect(
        &self,
        server_configs: &str,
        timeout_secs: Option<u64>,
    ) -> Result<BatchReport, BatchError> {
        let plan = BatchPlan::parse(server_configs)?;
        let timeout_secs = timeout_secs.unwrap_or(self.default_timeout_secs);
        info!(
            total = plan.len(),
            rejected = plan.rejected_count(),
            timeout_secs,
            "Running batch inspection"
        );
        Ok(batch::execute(&self.runner, plan, timeout_secs).await)
    }

    /// Loads a saved configuration and inspects the target it names.
    pub async fn inspect_with_config(
        &self,
        path: &Path,
        timeout_secs: Option<u64>,
    ) -> Result<ConfiguredInspection, ConfigStoreError> {
        let loaded = ConfigStore::load(path)?;
        info!(
            path = %path.display(),
            command = loaded.target.command(),
            "Inspecting with saved configuration"
        );
        let result = self.inspect(&loaded.target, timeout_secs).await;
        Ok(ConfiguredInspection {
            config_used: loaded.document,
            result,
        })
    }
}

impl Envelope for Result<LogLevel, LoggingError> {
    fn to_envelope(&self) -> Value {
        match self {
            Ok(level) => serde_json::json!({
                "success": true,
                "message": format!("Logging level set to {level}"),
            }),
            Err(err) => crate::domain::envelope::failure(err.to_string()),
        }
    }
}

/// Invocation result annotated with the configuration it was run from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredInspection {
    pub config_used: Value,
    pub result: InvocationResult,
}

impl Envelope for ConfiguredInspection {
    fn to_envelope(&self) -> Value {
        let mut fields = envelope_fields(&self.result);
        fields.insert("config_used".to_string(), self.config_used.clone());
        Value::Object(fields)
    }
}

impl Envelope for Result<ConfiguredInspection, ConfigStoreError> {
    fn to_envelope(&self) -> Value {
        match self {
            Ok(inspection) => inspection.to_envelope(),
            Err(err) => crate::domain::envelope::failure(err.to_string()),
        }
    }
}
