use colo_core::{AppConfig, AppConfigExt};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds all shared state for the CLI application.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load_or_default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the current config
    pub async fn config(&self) -> AppConfig {
        *self.config.read().await
    }
}
