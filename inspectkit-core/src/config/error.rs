use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read settings from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{field}' must be a positive number of seconds")]
    InvalidTimeout { field: &'static str },

    #[error("invalid 'log_level' value '{value}' - use DEBUG, INFO, WARNING, or ERROR")]
    InvalidLogLevel { value: String },

    #[error("'program' must not be empty")]
    EmptyProgram,
}

/// Errors raised by the saved target configuration store.
///
/// Display strings are the user-facing messages of the store operations.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid JSON in configuration file")]
    InvalidJson,

    #[error("Configuration file missing server_command")]
    MissingServerCommand,

    #[error("Configuration file server_args must be a string or null")]
    InvalidServerArgs,

    #[error("Failed to inspect with config: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save configuration: invalid configuration name '{name}'")]
    InvalidName { name: String },

    #[error("Failed to save configuration: server command must not be empty")]
    EmptyCommand,

    #[error("Failed to save configuration: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
