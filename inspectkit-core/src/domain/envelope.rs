//! Uniform `{success, ...}` JSON envelope.
//!
//! Every public operation renders its typed result through [`Envelope`] so
//! that callers on the CLI and JSON-RPC surfaces can check `success` before
//! trusting any other field.

use super::invocation::{InvocationError, InvocationOutput, InvocationResult};
use serde_json::{Map as JsonMap, Value, json};

pub trait Envelope {
    fn to_envelope(&self) -> Value;

    fn is_success(&self) -> bool {
        self.to_envelope()
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Builds `{success: false, error: <message>}`.
pub fn failure(message: impl Into<String>) -> Value {
    json!({ "success": false, "error": message.into() })
}

impl Envelope for InvocationOutput {
    fn to_envelope(&self) -> Value {
        match self {
            InvocationOutput::Document(map) => {
                let mut envelope = JsonMap::with_capacity(map.len() + 1);
                envelope.insert("success".to_string(), Value::Bool(true));
                for (key, value) in map {
                    if key != "success" {
                        envelope.insert(key.clone(), value.clone());
                    }
                }
                Value::Object(envelope)
            }
            InvocationOutput::Raw { stdout, stderr } => json!({
                "success": true,
                "raw_output": stdout,
                "stderr": stderr,
            }),
        }
    }
}

impl Envelope for InvocationError {
    fn to_envelope(&self) -> Value {
        match self {
            InvocationError::ExitStatus {
                code,
                stdout,
                stderr,
            } => json!({
                "success": false,
                "error": self.to_string(),
                "exit_code": code,
                "stdout": stdout,
                "stderr": stderr,
            }),
            other => failure(other.to_string()),
        }
    }
}

impl Envelope for InvocationResult {
    fn to_envelope(&self) -> Value {
        match self {
            Ok(output) => output.to_envelope(),
            Err(err) => err.to_envelope(),
        }
    }
}

/// Envelope fields as a map, for callers that annotate it further.
pub fn envelope_fields(source: &impl Envelope) -> JsonMap<String, Value> {
    match source.to_envelope() {
        Value::Object(map) => map,
        other => {
            let mut map = JsonMap::new();
            map.insert("success".to_string(), Value::Bool(false));
            map.insert("error".to_string(), other);
            map
        }
    }
}
