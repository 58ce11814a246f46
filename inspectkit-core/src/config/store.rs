use super::error::ConfigStoreError;
use crate::domain::envelope::failure;
use crate::domain::{Envelope, Target};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Saved target descriptor, one JSON document per name.
///
/// `created_at` records the path the document was written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub name: String,
    pub server_command: String,
    pub server_args: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedConfig {
    pub record: ConfigRecord,
    pub path: PathBuf,
}

/// A document read back from disk together with the target it names.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub target: Target,
    /// The document exactly as stored.
    pub document: Value,
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Writes `<dir>/<name>.json`, replacing any previous document.
    pub fn save(
        &self,
        server_command: &str,
        name: &str,
        server_args: Option<&str>,
    ) -> Result<SavedConfig, ConfigStoreError> {
        validate_name(name)?;
        if server_command.trim().is_empty() {
            return Err(ConfigStoreError::EmptyCommand);
        }

        let path = self.path_for(name);
        let record = ConfigRecord {
            name: name.to_string(),
            server_command: server_command.to_string(),
            server_args: server_args.map(str::to_string),
            created_at: path.display().to_string(),
        };

        fs::create_dir_all(&self.dir).map_err(|source| ConfigStoreError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let mut encoded = serde_json::to_string_pretty(&record)?;
        encoded.push('\n');
        fs::write(&path, encoded).map_err(|source| ConfigStoreError::Write {
            path: path.clone(),
            source,
        })?;

        info!(name, path = %path.display(), "Saved inspector configuration");
        Ok(SavedConfig { record, path })
    }

    /// Reads a saved document from any path.
    pub fn load(path: &Path) -> Result<LoadedConfig, ConfigStoreError> {
        if !path.exists() {
            return Err(ConfigStoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "Loading inspector configuration");

        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigStoreError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigStoreError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let document: Value =
            serde_json::from_str(&content).map_err(|_| ConfigStoreError::InvalidJson)?;

        let command = document
            .get("server_command")
            .and_then(Value::as_str)
            .ok_or(ConfigStoreError::MissingServerCommand)?;
        let args = match document.get("server_args") {
            None | Some(Value::Null) => None,
            Some(Value::String(args)) => Some(args.as_str()),
            Some(_) => return Err(ConfigStoreError::InvalidServerArgs),
        };
        let target =
            Target::new(command, args).map_err(|_| ConfigStoreError::MissingServerCommand)?;

        Ok(LoadedConfig { target, document })
    }
}

fn validate_name(name: &str) -> Result<(), ConfigStoreError> {
    let invalid = || ConfigStoreError::InvalidName {
        name: name.to_string(),
    };
    if name.trim().is_empty() {
        return Err(invalid());
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

impl Envelope for SavedConfig {
    fn to_envelope(&self) -> Value {
        json!({
            "success": true,
            "message": format!("Configuration saved to {}", self.path.display()),
            "config": self.record,
        })
    }
}

impl Envelope for Result<SavedConfig, ConfigStoreError> {
    fn to_envelope(&self) -> Value {
        match self {
            Ok(saved) => saved.to_envelope(),
            Err(err) => failure(err.to_string()),
        }
    }
}
