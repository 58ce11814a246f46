use super::types::{JSONRPC_VERSION, RpcRequest, RpcResponse};
use crate::application::help::help;
use crate::application::{CommandRunner, Inspector};
use crate::config::ConfigStore;
use crate::domain::{Envelope, InvocationError, Target};
use crate::guidance;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum RpcServeError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serves inspector operations to one client, one request at a time.
pub struct RpcServer<R> {
    inspector: Inspector<R>,
    store: ConfigStore,
}

type Params = Map<String, Value>;

impl<R: CommandRunner> RpcServer<R> {
    pub fn new(inspector: Inspector<R>, store: ConfigStore) -> Self {
        Self { inspector, store }
    }

    pub fn inspector(&self) -> &Inspector<R> {
        &self.inspector
    }

    /// Reads requests until EOF, answering each before reading the next.
    pub async fn serve<Rd, W>(&mut self, reader: Rd, mut writer: W) -> Result<(), RpcServeError>
    where
        Rd: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("JSON-RPC stdio server ready");
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line).await;
            let encoded = serde_json::to_string(&response)?;
            writer.write_all(encoded.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        info!("Input closed, stopping JSON-RPC server");
        Ok(())
    }

    pub async fn handle_line(&mut self, line: &str) -> RpcResponse {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, "Rejecting unparsable JSON-RPC line");
                return RpcResponse::parse_error(err.to_string());
            }
        };
        let id = value.get("id").cloned();
        match serde_json::from_value::<RpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => RpcResponse::invalid_request(id, format!("Invalid request: {err}")),
        }
    }

    pub async fn handle_request(&mut self, request: RpcRequest) -> RpcResponse {
        debug!(method = %request.method, "Received JSON-RPC request");
        let id = request.id;

        if request.jsonrpc != JSONRPC_VERSION {
            return RpcResponse::invalid_request(id, "Unsupported jsonrpc version (expected 2.0)");
        }

        let params = match request.params {
            None | Some(Value::Null) => Params::new(),
            Some(Value::Object(map)) => map,
            Some(_) => return RpcResponse::invalid_params(id, "params must be an object"),
        };

        let outcome = match request.method.as_str() {
            "inspector.inspect" => self.handle_inspect(&params).await,
            "inspector.call_tool" => self.handle_call_tool(&params).await,
            "inspector.read_resource" => self.handle_read_resource(&params).await,
            "inspector.get_prompt" => self.handle_get_prompt(&params).await,
            "inspector.list_templates" => self.handle_list_templates(&params).await,
            "inspector.set_logging_level" => self.handle_set_logging_level(&params),
            "inspector.comprehensive_test" => self.handle_comprehensive_test(&params).await,
            "inspector.batch_inspect" => self.handle_batch_inspect(&params).await,
            "inspector.save_config" => self.handle_save_config(&params),
            "inspector.inspect_with_config" => self.handle_inspect_with_config(&params).await,
            "inspector.help" => optional_str(&params, "topic").map(|topic| help(topic).to_envelope()),
            "guidance.prompt" => handle_guidance_prompt(&params),
            "guidance.document" => {
                required_str(&params, "name").map(|name| guidance::read_document(name).to_envelope())
            }
            other => {
                error!(method = other, "Unknown JSON-RPC method");
                return RpcResponse::method_not_found(id, other);
            }
        };

        match outcome {
            Ok(result) => RpcResponse::success(id, result),
            Err(message) => RpcResponse::invalid_params(id, message),
        }
    }

    async fn handle_inspect(&self, params: &Params) -> Result<Value, String> {
        let timeout = timeout_param(params)?;
        Ok(match target_param(params)? {
            Ok(target) => self.inspector.inspect(&target, timeout).await.to_envelope(),
            Err(rejected) => rejected,
        })
    }

    async fn handle_call_tool(&self, params: &Params) -> Result<Value, String> {
        let tool = required_str(params, "tool_name")?;
        let arguments = blob_param(params, "tool_args")?;
        let timeout = timeout_param(params)?;
        Ok(match target_param(params)? {
            Ok(target) => self
                .inspector
                .call_tool(&target, tool, arguments.as_deref(), timeout)
                .await
                .to_envelope(),
            Err(rejected) => rejected,
        })
    }

    async fn handle_read_resource(&self, params: &Params) -> Result<Value, String> {
        let uri = required_str(params, "resource_uri")?;
        let timeout = timeout_param(params)?;
        Ok(match target_param(params)? {
            Ok(target) => self
                .inspector
                .read_resource(&target, uri, timeout)
                .await
                .to_envelope(),
            Err(rejected) => rejected,
        })
    }

    async fn handle_get_prompt(&self, params: &Params) -> Result<Value, String> {
        let prompt = required_str(params, "prompt_name")?;
        let arguments = blob_param(params, "prompt_args")?;
        let timeout = timeout_param(params)?;
        Ok(match target_param(params)? {
            Ok(target) => self
                .inspector
                .get_prompt(&target, prompt, arguments.as_deref(), timeout)
                .await
                .to_envelope(),
            Err(rejected) => rejected,
        })
    }

    async fn handle_list_templates(&self, params: &Params) -> Result<Value, String> {
        let timeout = timeout_param(params)?;
        Ok(match target_param(params)? {
            Ok(target) => self
                .inspector
                .list_templates(&target, timeout)
                .await
                .to_envelope(),
            Err(rejected) => rejected,
        })
    }

    fn handle_set_logging_level(&mut self, params: &Params) -> Result<Value, String> {
        let level = required_str(params, "level")?;
        Ok(self.inspector.set_logging_level(level).to_envelope())
    }

    async fn handle_comprehensive_test(&self, params: &Params) -> Result<Value, String> {
        let command = required_str(params, "server_command")?;
        let args = optional_str(params, "server_args")?;
        let timeout = timeout_param(params)?;
        Ok(self
            .inspector
            .comprehensive_test(command, args, timeout)
            .await
            .to_envelope())
    }

    async fn handle_batch_inspect(&self, params: &Params) -> Result<Value, String> {
        let configs = blob_param(params, "server_configs")?
            .ok_or_else(|| "params.server_configs is required".to_string())?;
        let timeout = timeout_param(params)?;
        Ok(self
            .inspector
            .batch_inspect(&configs, timeout)
            .await
            .to_envelope())
    }

    fn handle_save_config(&self, params: &Params) -> Result<Value, String> {
        let command = required_str(params, "server_command")?;
        let name = required_str(params, "config_name")?;
        let args = optional_str(params, "server_args")?;
        Ok(self.store.save(command, name, args).to_envelope())
    }

    async fn handle_inspect_with_config(&self, params: &Params) -> Result<Value, String> {
        let path = required_str(params, "config_path")?;
        let timeout = timeout_param(params)?;
        Ok(self
            .inspector
            .inspect_with_config(Path::new(path), timeout)
            .await
            .to_envelope())
    }
}

fn handle_guidance_prompt(params: &Params) -> Result<Value, String> {
    let name = required_str(params, "name")?;
    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => HashMap::new(),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| match value {
                Value::String(text) => Ok((key.clone(), text.clone())),
                _ => Err(format!("params.arguments.{key} must be a string")),
            })
            .collect::<Result<HashMap<_, _>, _>>()?,
        Some(_) => return Err("params.arguments must be an object".to_string()),
    };
    Ok(guidance::render_prompt(name, &arguments).to_envelope())
}

fn required_str<'a>(params: &'a Params, key: &str) -> Result<&'a str, String> {
    match params.get(key) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(format!("params.{key} must be a string")),
        None => Err(format!("params.{key} is required")),
    }
}

fn optional_str<'a>(params: &'a Params, key: &str) -> Result<Option<&'a str>, String> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(format!("params.{key} must be a string")),
    }
}

/// Argument blobs may be sent pre-encoded or as structured JSON.
fn blob_param(params: &Params, key: &str) -> Result<Option<String>, String> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(value @ (Value::Object(_) | Value::Array(_))) => serde_json::to_string(value)
            .map(Some)
            .map_err(|err| format!("params.{key} could not be encoded: {err}")),
        Some(_) => Err(format!("params.{key} must be a string, object or array")),
    }
}

fn timeout_param(params: &Params) -> Result<Option<u64>, String> {
    match params.get("timeout") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| "params.timeout must be a non-negative integer".to_string()),
    }
}

/// Outer error is a malformed request; inner error is a blank command, which
/// is reported as a failed envelope.
fn target_param(params: &Params) -> Result<Result<Target, Value>, String> {
    let command = required_str(params, "server_command")?;
    let args = optional_str(params, "server_args")?;
    Ok(Target::new(command, args).map_err(|_| InvocationError::MissingCommand.to_envelope()))
}
