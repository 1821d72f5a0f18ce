//! Error types for themelift
//!
//! Uses `thiserror` for library errors. Every failure is fatal and carries
//! the offending resource, path, or command; the binary renders it once and
//! exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for themelift operations
pub type ThemeliftResult<T> = Result<T, ThemeliftError>;

/// Main error type for themelift operations
#[derive(Error, Debug)]
pub enum ThemeliftError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Theme name missing and not derivable from the project directory
    #[error("cannot determine theme name from '{root}' - set theme.name in themelift.toml")]
    ThemeNameUnset { root: PathBuf },

    /// No deploy root from config, CLI, or environment
    #[error(
        "deploy root is not configured - set deploy.dir or the \
         LIFERAY_APP_SERVER_DEPLOY_DIR environment variable"
    )]
    DeployRootUnset,

    /// Environment-provided deploy root is not a directory
    #[error("app server deploy root '{path}' is not a directory")]
    DeployRootInvalid { path: PathBuf },

    /// Deployment target directory absent - theme was never deployed
    #[error("theme is not deployed at '{path}'")]
    ThemeNotDeployed { path: PathBuf },

    /// Project has no content directory
    #[error("no content, no directory at '{path}' exists")]
    ContentDirMissing { path: PathBuf },

    /// Filesystem failure while copying a static resource
    #[error("error copying static resource '{resource}': {source}")]
    CopyResource {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// Compiler probe failed - binary missing or `--version` returned non-zero
    #[error("can't run sass compiler '{command}', is it installed?")]
    CompilerUnavailable { command: String },

    /// Compiler returned failure for one entry point
    #[error("error while compiling sass file '{entry}': {reason}")]
    CompileFailed { entry: String, reason: String },

    /// Append-write of the cache evict comment failed
    #[error("error evicting '{file}' from sass cache: {source}")]
    CacheEvict {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
