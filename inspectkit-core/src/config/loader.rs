use super::error::ConfigError;
use super::settings::Settings;
use crate::application::LogLevel;
use crate::constants::{
    CONFIG_PATH, DEFAULT_COMPREHENSIVE_TIMEOUT_SECS, DEFAULT_CONFIG_DIR,
    DEFAULT_INSPECTOR_PACKAGE, DEFAULT_LOG_LEVEL, DEFAULT_PROGRAM, DEFAULT_TIMEOUT_SECS,
    ENV_CONFIG_DIR, ENV_PATH, ENV_PROGRAM,
};
use dotenvy::from_filename;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw settings structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawSettings {
    pub program: Option<String>,
    pub program_args: Option<Vec<String>>,
    pub default_timeout_secs: Option<u64>,
    pub comprehensive_timeout_secs: Option<u64>,
    pub config_dir: Option<String>,
    pub log_level: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate settings from a file path.
///
/// Without an explicit path, a missing default file falls back to defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    ensure_env_loaded();
    let raw = match path {
        Some(path) => read_raw(path)?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_raw(default_path)?
            } else {
                debug!(path = CONFIG_PATH, "No settings file; using defaults");
                RawSettings::default()
            }
        }
    };
    validate_and_build(apply_env_overrides(raw))
}

pub(super) fn parse_settings(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    let raw: RawSettings = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_and_build(raw)
}

fn read_raw(path: &Path) -> Result<RawSettings, ConfigError> {
    debug!(path = %path.display(), "Reading inspectkit settings file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides(mut raw: RawSettings) -> RawSettings {
    if let Ok(program) = env::var(ENV_PROGRAM) {
        debug!(program = %program, "Overriding inspector program from environment");
        raw.program = Some(program);
    }
    if let Ok(dir) = env::var(ENV_CONFIG_DIR) {
        debug!(dir = %dir, "Overriding config directory from environment");
        raw.config_dir = Some(dir);
    }
    raw
}

fn expand(value: &str) -> String {
    shellexpand::full(value)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

fn validate_and_build(raw: RawSettings) -> Result<Settings, ConfigError> {
    let program = expand(raw.program.as_deref().unwrap_or(DEFAULT_PROGRAM));
    if program.trim().is_empty() {
        return Err(ConfigError::EmptyProgram);
    }

    let program_args = raw
        .program_args
        .unwrap_or_else(|| vec![DEFAULT_INSPECTOR_PACKAGE.to_string()])
        .iter()
        .map(|arg| expand(arg))
        .collect();

    let default_timeout_secs = raw.default_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if default_timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            field: "default_timeout_secs",
        });
    }
    let comprehensive_timeout_secs = raw
        .comprehensive_timeout_secs
        .unwrap_or(DEFAULT_COMPREHENSIVE_TIMEOUT_SECS);
    if comprehensive_timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            field: "comprehensive_timeout_secs",
        });
    }

    let level = raw.log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level: LogLevel = level
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel { value: level })?;

    let config_dir = PathBuf::from(expand(
        raw.config_dir.as_deref().unwrap_or(DEFAULT_CONFIG_DIR),
    ));

    Ok(Settings {
        program,
        program_args,
        default_timeout_secs,
        comprehensive_timeout_secs,
        config_dir,
        log_level,
    })
}
