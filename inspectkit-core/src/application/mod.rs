//! # Application Module
//!
//! Inspection workflows built on top of the inspector subprocess.
//!
//! ## Submodules
//!
//! - [`runner`] - Builds and executes one inspector invocation
//! - [`inspector`] - Single-target operations and the logging context they share
//! - [`comprehensive`] - Three-probe health check for one target
//! - [`batch`] - Sequential inspection of a list of targets
//! - [`help`] - Built-in help topics
//! - [`logging`] - Log level parsing and the level sink seam

pub mod batch;
pub mod comprehensive;
pub mod help;
pub mod inspector;
pub mod logging;
pub mod runner;

pub use batch::{BatchEntry, BatchError, BatchPlan, BatchReport};
pub use comprehensive::ComprehensiveReport;
pub use inspector::{ConfiguredInspection, Inspector};
pub use logging::{LevelSink, LogLevel, LoggingContext, LoggingError};
pub use runner::{CommandRunner, InspectorProcess, InvocationRequest};
