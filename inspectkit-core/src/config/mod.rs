pub mod error;
pub mod loader;
pub mod settings;
pub mod store;

pub use crate::constants::CONFIG_PATH;
pub use error::{ConfigError, ConfigStoreError};
pub use settings::Settings;
pub use store::{ConfigRecord, ConfigStore, LoadedConfig, SavedConfig};
