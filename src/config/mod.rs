//! Configuration for themelift
//!
//! Configuration is resolved in this order (highest priority first):
//!
//! 1. Command-line flags
//! 2. Environment variables (`LIFERAY_APP_SERVER_DEPLOY_DIR`, `THEMELIFT_MODE`)
//! 3. Project config (`themelift.toml` in the project root)
//! 4. User config (`$XDG_CONFIG_HOME/themelift/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME, DEPLOY_DIR_ENV, MODE_ENV};
pub use types::{Config, ContentConfig, DeployConfig, Mode, SassConfig, ThemeConfig};
