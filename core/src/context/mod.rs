pub mod config;
pub mod error;

pub use config::{APP_NAME, AppConfig, AppConfigExt, PlayerLocationConfig};
pub use error::ConfigError;
