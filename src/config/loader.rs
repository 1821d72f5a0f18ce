//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ThemeliftError, ThemeliftResult};

use super::types::{Config, Mode};

/// Project-level configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "themelift.toml";

/// Environment variable naming the app server's deploy root.
///
/// This is the environment rendering of the classic
/// `liferay.app.server.deploy.dir` build property.
pub const DEPLOY_DIR_ENV: &str = "LIFERAY_APP_SERVER_DEPLOY_DIR";

/// Environment override for the deployment mode.
pub const MODE_ENV: &str = "THEMELIFT_MODE";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ThemeliftResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ThemeliftError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    // Try project config first
    if let Some(root) = project_root {
        let project_config = root.join(CONFIG_FILE_NAME);
        if project_config.exists() {
            if let Ok(config) = Config::load(&project_config) {
                return with_env_overrides(config);
            }
        }
    }

    // Try user config
    if let Some(user_config_dir) = user_config_dir() {
        let user_config = user_config_dir.join("themelift/config.toml");
        if user_config.exists() {
            if let Ok(config) = Config::load(&user_config) {
                return with_env_overrides(config);
            }
        }
    }

    // Return defaults with env overrides
    with_env_overrides(Config::default())
}

/// Apply environment overrides to a loaded configuration.
///
/// This is the only place themelift reads ambient state; the pipeline
/// receives the result as plain data.
pub fn with_env_overrides(mut config: Config) -> Config {
    // App server deploy root - used by the resolver when deploy.dir is unset
    if let Ok(root) = std::env::var(DEPLOY_DIR_ENV) {
        if !root.is_empty() {
            config.deploy.server_root = Some(PathBuf::from(root));
        }
    }

    // THEMELIFT_MODE - unrecognized values keep the configured mode
    if let Ok(mode) = std::env::var(MODE_ENV) {
        match mode.to_lowercase().as_str() {
            "copy" => config.deploy.mode = Mode::Copy,
            "compile" => config.deploy.mode = Mode::Compile,
            _ => {}
        }
    }

    config
}

/// Get XDG config directory
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "theme",
        "name",
        "deploy",
        "dir",
        "mode",
        "content",
        "static_resources",
        "stylesheets",
        "sass",
        "command",
        "style",
        "source_map",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = edit_distance(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<u8> = a.bytes().collect();
    let b: Vec<u8> = b.bytes().collect();

    // Full DP table; the strings involved are config keys, all tiny.
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitution);
        }
    }

    table[a.len()][b.len()]
}
