//! Application configuration
//!
//! Re-exports the shared types from colo-types and persists them with confy.

use std::path::PathBuf;

pub use colo_types::{AppConfig, PlayerLocationConfig};

use super::ConfigError;

/// confy application name, also the config directory name
pub const APP_NAME: &str = "colosseum-waves";
const CONFIG_NAME: &str = "config";

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Result<Self, ConfigError>;
    /// Load, falling back to defaults when the file is missing or unreadable
    fn load_or_default() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
    fn path() -> Result<PathBuf, ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        })
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }
}
