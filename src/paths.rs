//! Path resolution for the deploy target and the theme content tree
//!
//! Resolution is eager: [`ResolvedPaths::resolve`] checks the deploy target
//! first, then the content directory, before any copy or compile runs. A
//! missing target therefore fails the pipeline with nothing written.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ThemeliftError, ThemeliftResult};

/// Theme content tree, relative to the project root.
pub const CONTENT_DIR: &str = "src/main/webapp";

/// Stylesheet directory inside the content tree and the deployed theme.
pub const CSS_DIR: &str = "css";

/// Directories the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub theme_name: String,
    pub content_dir: PathBuf,
    pub deploy_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve and validate every directory the pipeline touches.
    pub fn resolve(config: &Config, project_root: &Path) -> ThemeliftResult<Self> {
        let theme_name = theme_name(config, project_root)?;
        let deploy_dir = theme_deploy_dir(config, project_root)?;
        let content_dir = content_dir(project_root)?;
        Ok(Self {
            theme_name,
            content_dir,
            deploy_dir,
        })
    }
}

/// Determine the deployed theme's directory name.
///
/// `theme.name` from the configuration wins; otherwise the project root's
/// directory name is used.
pub fn theme_name(config: &Config, project_root: &Path) -> ThemeliftResult<String> {
    if let Some(name) = &config.theme.name {
        if !name.is_empty() {
            return Ok(name.clone());
        }
    }

    project_root
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| ThemeliftError::ThemeNameUnset {
            root: project_root.to_path_buf(),
        })
}

/// Resolve the base directory themes are deployed under.
///
/// An explicit `deploy.dir` is trusted as-is; only the app-server root taken
/// from the environment is required to exist as a directory. In both cases
/// the final theme target is validated by [`theme_deploy_dir`].
pub fn deploy_base(config: &Config) -> ThemeliftResult<PathBuf> {
    if let Some(dir) = &config.deploy.dir {
        return Ok(dir.clone());
    }

    let root = config
        .deploy
        .server_root
        .as_ref()
        .ok_or(ThemeliftError::DeployRootUnset)?;
    if !root.is_dir() {
        return Err(ThemeliftError::DeployRootInvalid { path: root.clone() });
    }
    Ok(root.clone())
}

/// Resolve the deployed theme directory and require that it exists.
///
/// The returned path is always absolute: the compile invocation runs with
/// the content directory as its working directory, so a relative target
/// would be re-resolved against the content tree by the compiler.
pub fn theme_deploy_dir(config: &Config, project_root: &Path) -> ThemeliftResult<PathBuf> {
    let name = theme_name(config, project_root)?;
    let target = deploy_base(config)?.join(name);
    if !target.exists() {
        return Err(ThemeliftError::ThemeNotDeployed { path: target });
    }
    if target.is_absolute() {
        Ok(target)
    } else {
        Ok(target.canonicalize()?)
    }
}

/// Locate the theme content tree under the project root.
pub fn content_dir(project_root: &Path) -> ThemeliftResult<PathBuf> {
    let dir = project_root.join(CONTENT_DIR);
    if !dir.is_dir() {
        return Err(ThemeliftError::ContentDirMissing { path: dir });
    }
    Ok(dir)
}
