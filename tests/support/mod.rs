//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use inspectkit_core::{CommandRunner, InvocationError, InvocationOutput, InvocationRequest, InvocationResult};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

/// Records every request and answers from a script keyed by method path.
///
/// Unscripted methods answer with an empty JSON document.
#[derive(Default)]
pub struct FakeRunner {
    scripted: Mutex<HashMap<String, InvocationResult>>,
    calls: Mutex<Vec<InvocationRequest>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: &str, result: InvocationResult) -> Self {
        self.scripted
            .lock()
            .expect("script lock")
            .insert(method.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<InvocationRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|request| request.method.as_path())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, request: &InvocationRequest) -> InvocationResult {
        self.calls
            .lock()
            .expect("calls lock")
            .push(request.clone());
        self.scripted
            .lock()
            .expect("script lock")
            .get(&request.method.as_path())
            .cloned()
            .unwrap_or_else(|| Ok(InvocationOutput::Document(Map::new())))
    }
}

pub fn document(value: Value) -> InvocationResult {
    match value {
        Value::Object(map) => Ok(InvocationOutput::Document(map)),
        other => panic!("document fixture must be an object, got {other}"),
    }
}

pub fn listing(field: &str, count: usize) -> InvocationResult {
    let items: Vec<Value> = (0..count)
        .map(|index| json!({ "name": format!("{field}-{index}") }))
        .collect();
    document(json!({ field: items }))
}

pub fn exit_failure(code: i32, stderr: &str) -> InvocationResult {
    Err(InvocationError::ExitStatus {
        code,
        stdout: String::new(),
        stderr: stderr.to_string(),
    })
}
