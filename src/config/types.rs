//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeliftResult;

use super::loader::{self, ConfigWarning};

/// Deployment mode: copy raw sources or compile them
///
/// `copy` is the fast development loop - raw stylesheets are copied as-is
/// and the server is forced to recompile them via cache eviction.
/// `compile` runs the sass compiler locally and deploys its output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Copy,
    Compile,
}

impl Mode {
    /// Stable lowercase name, as used in config files and event output
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Copy => "copy",
            Mode::Compile => "compile",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme identity configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// Theme name; defaults to the project directory name when unset
    #[serde(default)]
    pub name: Option<String>,
}

/// Deployment target configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    /// Explicit deployment base directory; the theme lands in `dir/<name>`
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// App-server deploy root picked up from the environment by the loader.
    /// Never read from the config file; the resolver validates it.
    #[serde(skip)]
    pub server_root: Option<PathBuf>,

    #[serde(default)]
    pub mode: Mode,
}

/// Content selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Static resources (files or directories) copied verbatim
    #[serde(default = "default_static_resources")]
    pub static_resources: Vec<String>,

    /// Stylesheet entry points under the `css` subdirectory
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            static_resources: default_static_resources(),
            stylesheets: default_stylesheets(),
        }
    }
}

fn default_static_resources() -> Vec<String> {
    vec![
        "js".to_string(),
        "images".to_string(),
        "templates".to_string(),
    ]
}

fn default_stylesheets() -> Vec<String> {
    vec!["custom.css".to_string()]
}

/// Sass compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SassConfig {
    /// Compiler command name or path
    #[serde(default = "default_sass_command")]
    pub command: String,

    /// Output style passed to `--style` (the compiler validates the value)
    #[serde(default = "default_sass_style")]
    pub style: String,

    /// Source map mode passed to `--sourcemap=`
    #[serde(default = "default_sass_source_map")]
    pub source_map: String,
}

impl Default for SassConfig {
    fn default() -> Self {
        Self {
            command: default_sass_command(),
            style: default_sass_style(),
            source_map: default_sass_source_map(),
        }
    }
}

fn default_sass_command() -> String {
    "sass".to_string()
}

fn default_sass_style() -> String {
    "expanded".to_string()
}

fn default_sass_source_map() -> String {
    "none".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub sass: SassConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ThemeliftResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ThemeliftResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment overrides (deploy root, THEMELIFT_* variables)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
