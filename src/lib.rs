//! Themelift - deploy helper for Liferay-style theme projects
//!
//! Themelift pushes theme changes from a project's `src/main/webapp` content
//! tree into an already-deployed theme directory on the application server.
//! Static assets are copied as-is; stylesheets are either rebuilt through the
//! external sass compiler or copied verbatim with a cache-evicting comment
//! appended so the server notices the change.

pub mod config;
pub mod copy;
pub mod error;
pub mod evict;
pub mod paths;
pub mod pipeline;
pub mod process;
pub mod sass;

// Re-exports for convenience
pub use config::{Config, Mode};
pub use error::{ThemeliftError, ThemeliftResult};
pub use paths::ResolvedPaths;
pub use pipeline::{hard_deploy, live_deploy, preflight, CheckItem, DeployEvent};
pub use process::{InheritedStdioRunner, Invocation, RunStatus, ToolRunner};
