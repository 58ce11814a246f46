//! # inspectkit-core
//!
//! Drives the MCP Inspector command-line tool as a subprocess to discover and
//! exercise the capabilities (tools, resources, prompts) of MCP servers.
//!
//! ## Modules
//!
//! - [`domain`] - Targets, methods, invocation results and the JSON envelope
//! - [`application`] - Command runner, single-target operations, comprehensive
//!   test, batch inspection, help topics and logging context
//! - [`config`] - Runtime settings (TOML) and the saved target config store
//! - [`guidance`] - Templated guidance prompts and reference documents
//! - [`infrastructure`] - Line-delimited JSON-RPC surface over stdio

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod guidance;
pub mod infrastructure;

pub use application::{
    BatchError, BatchReport, CommandRunner, ComprehensiveReport, Inspector, InspectorProcess,
    InvocationRequest, LevelSink, LogLevel, LoggingContext, LoggingError,
};
pub use config::{ConfigError, ConfigRecord, ConfigStore, ConfigStoreError, Settings};
pub use domain::{
    Envelope, InvocationError, InvocationOutput, InvocationResult, Method, Target, TargetError,
};
