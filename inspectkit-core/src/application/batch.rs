use super::runner::{CommandRunner, InvocationRequest};
use crate::domain::envelope::{envelope_fields, failure};
use crate::domain::{Envelope, InvocationError, InvocationResult, Method, Target};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Invalid JSON in server_configs parameter")]
    InvalidJson,
    #[error("Batch inspection failed: expected a JSON array of server configurations")]
    NotAnArray,
}

/// One input entry, validated before anything is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub index: usize,
    pub config: Value,
    pub target: Result<Target, InvocationError>,
}

impl BatchEntry {
    fn from_config(index: usize, config: Value) -> Self {
        let target = target_from_config(&config);
        Self {
            index,
            config,
            target,
        }
    }
}

fn target_from_config(config: &Value) -> Result<Target, InvocationError> {
    let Value::Object(fields) = config else {
        return Err(InvocationError::InvalidConfig);
    };
    let command = fields
        .get("command")
        .and_then(Value::as_str)
        .ok_or(InvocationError::MissingCommand)?;
    let args = args_from_value(fields.get("args"))?;
    Target::new(command, args).map_err(|_| InvocationError::MissingCommand)
}

/// Accepts `"a b"`, `["a", "b"]`, null or absent; anything else is rejected.
fn args_from_value(value: Option<&Value>) -> Result<Option<String>, InvocationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => Ok(Some(raw.clone())),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().ok_or(InvocationError::InvalidArgs))
            .collect::<Result<Vec<_>, _>>()
            .map(|parts| Some(parts.join(" "))),
        Some(_) => Err(InvocationError::InvalidArgs),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlan {
    entries: Vec<BatchEntry>,
}

impl BatchPlan {
    pub fn parse(raw: &str) -> Result<Self, BatchError> {
        let parsed: Value = serde_json::from_str(raw).map_err(|_| BatchError::InvalidJson)?;
        let Value::Array(configs) = parsed else {
            return Err(BatchError::NotAnArray);
        };
        let entries = configs
            .into_iter()
            .enumerate()
            .map(|(index, config)| BatchEntry::from_config(index, config))
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rejected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.target.is_err()).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub index: usize,
    pub config: Value,
    pub result: InvocationResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total_servers: usize,
    pub successful: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        let successful = self.items.iter().filter(|item| item.result.is_ok()).count();
        BatchSummary {
            total_servers: self.items.len(),
            successful,
            failed: self.items.len() - successful,
        }
    }
}

pub(crate) async fn execute<R: CommandRunner>(
    runner: &R,
    plan: BatchPlan,
    timeout_secs: u64,
) -> BatchReport {
    let mut items = Vec::with_capacity(plan.len());
    for entry in plan.entries {
        let result = match entry.target {
            Ok(target) => {
                let request = InvocationRequest::new(target, Method::ToolsList, timeout_secs);
                runner.run(&request).await
            }
            Err(err) => {
                debug!(index = entry.index, %err, "Skipping batch entry");
                Err(err)
            }
        };
        items.push(BatchItem {
            index: entry.index,
            config: entry.config,
            result,
        });
    }

    let report = BatchReport { items };
    let summary = report.summary();
    info!(
        total = summary.total_servers,
        successful = summary.successful,
        failed = summary.failed,
        "Batch inspection finished"
    );
    report
}

impl Envelope for BatchItem {
    fn to_envelope(&self) -> Value {
        let mut fields = envelope_fields(&self.result);
        fields.insert("index".to_string(), json!(self.index));
        fields.insert("config".to_string(), self.config.clone());
        Value::Object(fields)
    }
}

impl Envelope for BatchReport {
    fn to_envelope(&self) -> Value {
        json!({
            "success": true,
            "batch_results": self.items.iter().map(Envelope::to_envelope).collect::<Vec<_>>(),
            "summary": self.summary(),
        })
    }
}

impl Envelope for Result<BatchReport, BatchError> {
    fn to_envelope(&self) -> Value {
        match self {
            Ok(report) => report.to_envelope(),
            Err(err) => failure(err.to_string()),
        }
    }
}
