mod cli;
mod logging;

use clap::Parser;
use cli::{Cli, Command, TargetArgs};
use inspectkit_core::application::help::help;
use inspectkit_core::guidance::{self, GuidanceText};
use inspectkit_core::infrastructure::RpcServer;
use inspectkit_core::{
    ConfigStore, Envelope, Inspector, InspectorProcess, InvocationError, LoggingContext, Settings,
    Target,
};
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use thiserror::Error;
use tokio::io::{self, BufReader};
use tracing::{debug, info};

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid prompt parameter '{0}', expected KEY=VALUE")]
    InvalidParam(String),
    #[error("failed to read batch input from {path}: {source}")]
    BatchInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TargetArgs {
    fn build(&self) -> Result<Target, InvocationError> {
        Target::new(&self.server_command, self.args.as_deref())
            .map_err(|_| InvocationError::MissingCommand)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    let sink = logging::init_tracing(settings.log_level);
    info!("Starting inspectkit");
    debug!(?settings, "Settings resolved");

    let mut logging_context = LoggingContext::new(settings.log_level);
    if let Some(sink) = sink {
        logging_context = logging_context.with_sink(sink);
    }
    let runner = InspectorProcess::from_settings(&settings);
    let mut inspector = Inspector::from_settings(runner, &settings).with_logging(logging_context);
    let store = ConfigStore::new(&settings.config_dir);

    if let Some(level) = cli.log_level.as_deref() {
        let outcome = inspector.set_logging_level(level);
        if !outcome.is_success() {
            print_envelope(&outcome)?;
            std::process::exit(1);
        }
    }

    let success = match cli.command {
        Command::Inspect { target, timeout } => {
            let result = match target.build() {
                Ok(target) => inspector.inspect(&target, timeout).await,
                Err(err) => Err(err),
            };
            print_envelope(&result)?
        }
        Command::CallTool {
            target,
            tool_name,
            arguments,
            timeout,
        } => {
            let result = match target.build() {
                Ok(target) => {
                    inspector
                        .call_tool(&target, &tool_name, arguments.as_deref(), timeout)
                        .await
                }
                Err(err) => Err(err),
            };
            print_envelope(&result)?
        }
        Command::ReadResource {
            target,
            resource_uri,
            timeout,
        } => {
            let result = match target.build() {
                Ok(target) => inspector.read_resource(&target, &resource_uri, timeout).await,
                Err(err) => Err(err),
            };
            print_envelope(&result)?
        }
        Command::GetPrompt {
            target,
            prompt_name,
            arguments,
            timeout,
        } => {
            let result = match target.build() {
                Ok(target) => {
                    inspector
                        .get_prompt(&target, &prompt_name, arguments.as_deref(), timeout)
                        .await
                }
                Err(err) => Err(err),
            };
            print_envelope(&result)?
        }
        Command::Templates { target, timeout } => {
            let result = match target.build() {
                Ok(target) => inspector.list_templates(&target, timeout).await,
                Err(err) => Err(err),
            };
            print_envelope(&result)?
        }
        Command::Test { target, timeout } => {
            let report = inspector
                .comprehensive_test(&target.server_command, target.args.as_deref(), timeout)
                .await;
            print_envelope(&report)?
        }
        Command::Batch {
            server_configs,
            timeout,
        } => {
            let server_configs = read_batch_input(server_configs)?;
            print_envelope(&inspector.batch_inspect(&server_configs, timeout).await)?
        }
        Command::SaveConfig {
            target,
            config_name,
        } => print_envelope(&store.save(
            &target.server_command,
            &config_name,
            target.args.as_deref(),
        ))?,
        Command::InspectConfig {
            config_path,
            timeout,
        } => print_envelope(&inspector.inspect_with_config(&config_path, timeout).await)?,
        Command::HelpTopic { topic } => print_envelope(&help(topic.as_deref()))?,
        Command::Guide { name, params } => {
            let params = parse_params(&params)?;
            print_text(&guidance::render_prompt(&name, &params))?
        }
        Command::Doc { name } => print_text(&guidance::read_document(&name))?,
        Command::Serve => {
            info!("Entering JSON-RPC stdio mode");
            let mut server = RpcServer::new(inspector, store);
            server.serve(BufReader::new(io::stdin()), io::stdout()).await?;
            true
        }
    };

    info!(success, "inspectkit finished");
    if !success {
        std::process::exit(1);
    }
    Ok(())
}

fn print_envelope(outcome: &impl Envelope) -> Result<bool, Box<dyn Error>> {
    let envelope = outcome.to_envelope();
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(envelope
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false))
}

fn print_text(guidance: &GuidanceText) -> Result<bool, Box<dyn Error>> {
    match guidance.text() {
        Some(text) => {
            println!("{text}");
            Ok(true)
        }
        None => print_envelope(guidance),
    }
}

/// `@path` reads the array from a file; anything else is the JSON itself.
fn read_batch_input(raw: String) -> Result<String, CliError> {
    match raw.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::BatchInput {
            path: path.to_string(),
            source,
        }),
        None => Ok(raw),
    }
}

fn parse_params(raw: &[String]) -> Result<HashMap<String, String>, CliError> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .ok_or_else(|| CliError::InvalidParam(pair.clone()))
        })
        .collect()
}
