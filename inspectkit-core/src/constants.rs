//! Application constants
//!
//! Single source of truth for paths and defaults.

/// Default settings file path
pub const CONFIG_PATH: &str = "config/inspectkit.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Directory that receives saved target configurations
pub const DEFAULT_CONFIG_DIR: &str = "inspector_configs";

/// Program used to launch the inspector
pub const DEFAULT_PROGRAM: &str = "npx";

/// Package handed to [`DEFAULT_PROGRAM`]
pub const DEFAULT_INSPECTOR_PACKAGE: &str = "@modelcontextprotocol/inspector";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_COMPREHENSIVE_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Environment variable overriding the inspector program
pub const ENV_PROGRAM: &str = "INSPECTKIT_PROGRAM";

/// Environment variable overriding the saved-config directory
pub const ENV_CONFIG_DIR: &str = "INSPECTKIT_CONFIG_DIR";
