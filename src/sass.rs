//! Sass compiler invocation
//!
//! The compiler contract is the Ruby Sass command line the Liferay theme
//! toolchain expects:
//!
//! ```text
//! {command} --scss --compass --line-numbers --style {style} \
//!     --sourcemap={map} css/{entry} {deploy_dir}/css/{entry}
//! ```
//!
//! run from the content directory so `css/{entry}` resolves relative to the
//! theme sources. Availability is established with `{command} --version`
//! before anything is compiled.

use std::path::Path;

use crate::config::SassConfig;
use crate::error::{ThemeliftError, ThemeliftResult};
use crate::paths::CSS_DIR;
use crate::process::{Invocation, ToolRunner};

/// The `--version` invocation used to verify the compiler is installed.
pub fn probe_invocation(config: &SassConfig) -> Invocation {
    Invocation::new(&config.command).arg("--version")
}

/// The compile invocation for one stylesheet entry point.
pub fn compile_invocation(
    config: &SassConfig,
    content_dir: &Path,
    deploy_dir: &Path,
    entry: &str,
) -> Invocation {
    let output = deploy_dir.join(CSS_DIR).join(entry);
    Invocation::new(&config.command)
        .arg("--scss")
        .arg("--compass")
        .arg("--line-numbers")
        .arg("--style")
        .arg(&config.style)
        .arg(format!("--sourcemap={}", config.source_map))
        .arg(format!("{CSS_DIR}/{entry}"))
        .arg(output.display().to_string())
        .current_dir(content_dir)
}

/// Verify the configured compiler can run at all.
pub fn probe(runner: &mut dyn ToolRunner, config: &SassConfig) -> ThemeliftResult<()> {
    let unavailable = || ThemeliftError::CompilerUnavailable {
        command: config.command.clone(),
    };

    let status = runner.run(&probe_invocation(config)).map_err(|_| unavailable())?;
    if !status.success() {
        return Err(unavailable());
    }
    Ok(())
}

/// Compile one entry point into the deployed theme, blocking until the
/// compiler exits.
pub fn compile_entry(
    runner: &mut dyn ToolRunner,
    config: &SassConfig,
    content_dir: &Path,
    deploy_dir: &Path,
    entry: &str,
) -> ThemeliftResult<()> {
    let invocation = compile_invocation(config, content_dir, deploy_dir, entry);
    let status = runner
        .run(&invocation)
        .map_err(|e| ThemeliftError::CompileFailed {
            entry: entry.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(ThemeliftError::CompileFailed {
            entry: entry.to_string(),
            reason: status.describe(),
        });
    }
    Ok(())
}
