use super::error::ConfigError;
use crate::application::LogLevel;
use crate::constants::{
    DEFAULT_COMPREHENSIVE_TIMEOUT_SECS, DEFAULT_CONFIG_DIR, DEFAULT_INSPECTOR_PACKAGE,
    DEFAULT_PROGRAM, DEFAULT_TIMEOUT_SECS,
};
use std::path::{Path, PathBuf};

/// Runtime settings loaded from `config/inspectkit.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program that launches the inspector
    pub program: String,
    /// Arguments placed before `--cli`
    pub program_args: Vec<String>,
    pub default_timeout_secs: u64,
    pub comprehensive_timeout_secs: u64,
    /// Directory that holds saved target configurations
    pub config_dir: PathBuf,
    pub log_level: LogLevel,
}

impl Settings {
    /// Load settings from a file path (or the default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_settings(path)
    }

    /// Parse settings from TOML text without touching the environment
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_settings(content, Path::new("<inline>"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            program_args: vec![DEFAULT_INSPECTOR_PACKAGE.to_string()],
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
            comprehensive_timeout_secs: DEFAULT_COMPREHENSIVE_TIMEOUT_SECS,
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            log_level: LogLevel::Info,
        }
    }
}
