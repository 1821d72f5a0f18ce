//! Deployment orchestration
//!
//! Each deploy runs as a straight-line sequence of steps; the first failing
//! step aborts the run with nothing rolled back. Progress is surfaced as
//! [`DeployEvent`]s through a callback so the binary can render either text
//! or NDJSON.
//!
//! `live-deploy` resolves, copies statics, then either compiles every
//! stylesheet entry (after probing the compiler) or recopies `css` verbatim
//! and appends a cache-evict comment per entry. `hard-deploy` probes the
//! compiler before resolving anything, then copies and compiles all.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigWarning, Mode};
use crate::copy::{self, CopyOutcome};
use crate::error::ThemeliftResult;
use crate::evict;
use crate::paths::{ResolvedPaths, CSS_DIR};
use crate::process::ToolRunner;
use crate::sass;

/// Progress notification from a running deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    Resolved {
        theme_name: String,
        deploy_dir: PathBuf,
    },
    ResourceCopied {
        resource: String,
        files: usize,
    },
    ResourceSkipped {
        resource: String,
    },
    CompilerProbed {
        command: String,
    },
    EntryCompiled {
        entry: String,
    },
    EntryEvicted {
        entry: String,
    },
}

/// Deploy changed theme content into an already-deployed theme.
///
/// In copy mode stylesheets are copied verbatim and cache-evicted; in
/// compile mode they are rebuilt by the sass compiler. The compiler is only
/// probed in compile mode, after static resources have been copied.
pub fn live_deploy(
    config: &Config,
    project_root: &Path,
    runner: &mut dyn ToolRunner,
    on_event: &mut dyn FnMut(DeployEvent),
) -> ThemeliftResult<()> {
    let paths = ResolvedPaths::resolve(config, project_root)?;
    on_event(DeployEvent::Resolved {
        theme_name: paths.theme_name.clone(),
        deploy_dir: paths.deploy_dir.clone(),
    });

    copy_statics(config, &paths, on_event)?;

    match config.deploy.mode {
        Mode::Compile => {
            probe_compiler(config, runner, on_event)?;
            compile_all(config, &paths, runner, on_event)?;
        }
        Mode::Copy => {
            copy_one(&paths, CSS_DIR, on_event)?;
            for entry in &config.content.stylesheets {
                evict::evict_entry(&paths.deploy_dir, entry)?;
                on_event(DeployEvent::EntryEvicted {
                    entry: entry.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Full redeploy: probe the compiler before touching anything, then copy
/// statics and compile every stylesheet entry point.
///
/// The probe-first order is the point of this command - with a broken sass
/// toolchain the deployed theme is left untouched.
pub fn hard_deploy(
    config: &Config,
    project_root: &Path,
    runner: &mut dyn ToolRunner,
    on_event: &mut dyn FnMut(DeployEvent),
) -> ThemeliftResult<()> {
    probe_compiler(config, runner, on_event)?;

    let paths = ResolvedPaths::resolve(config, project_root)?;
    on_event(DeployEvent::Resolved {
        theme_name: paths.theme_name.clone(),
        deploy_dir: paths.deploy_dir.clone(),
    });

    copy_statics(config, &paths, on_event)?;
    compile_all(config, &paths, runner, on_event)?;

    Ok(())
}

fn probe_compiler(
    config: &Config,
    runner: &mut dyn ToolRunner,
    on_event: &mut dyn FnMut(DeployEvent),
) -> ThemeliftResult<()> {
    sass::probe(runner, &config.sass)?;
    on_event(DeployEvent::CompilerProbed {
        command: config.sass.command.clone(),
    });
    Ok(())
}

fn copy_statics(
    config: &Config,
    paths: &ResolvedPaths,
    on_event: &mut dyn FnMut(DeployEvent),
) -> ThemeliftResult<()> {
    for resource in &config.content.static_resources {
        copy_one(paths, resource, on_event)?;
    }
    Ok(())
}

fn copy_one(
    paths: &ResolvedPaths,
    resource: &str,
    on_event: &mut dyn FnMut(DeployEvent),
) -> ThemeliftResult<()> {
    match copy::copy_resource(&paths.content_dir, &paths.deploy_dir, resource)? {
        CopyOutcome::Copied { files } => on_event(DeployEvent::ResourceCopied {
            resource: resource.to_string(),
            files,
        }),
        CopyOutcome::SkippedMissing => on_event(DeployEvent::ResourceSkipped {
            resource: resource.to_string(),
        }),
    }
    Ok(())
}

fn compile_all(
    config: &Config,
    paths: &ResolvedPaths,
    runner: &mut dyn ToolRunner,
    on_event: &mut dyn FnMut(DeployEvent),
) -> ThemeliftResult<()> {
    for entry in &config.content.stylesheets {
        sass::compile_entry(
            runner,
            &config.sass,
            &paths.content_dir,
            &paths.deploy_dir,
            entry,
        )?;
        on_event(DeployEvent::EntryCompiled {
            entry: entry.clone(),
        });
    }
    Ok(())
}

/// One line of `themelift check` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

/// Run the non-mutating preflight checks.
///
/// Never writes to the deploy target; the only side effect is the compiler
/// probe subprocess.
pub fn preflight(
    config: &Config,
    warnings: &[ConfigWarning],
    project_root: &Path,
    runner: &mut dyn ToolRunner,
) -> Vec<CheckItem> {
    let mut items = Vec::new();

    items.push(if warnings.is_empty() {
        CheckItem {
            name: "configuration",
            passed: true,
            detail: "no unknown keys".to_string(),
        }
    } else {
        CheckItem {
            name: "configuration",
            passed: false,
            detail: format!("{} unknown key(s)", warnings.len()),
        }
    });

    items.push(
        match crate::paths::theme_deploy_dir(config, project_root) {
            Ok(dir) => CheckItem {
                name: "deploy target",
                passed: true,
                detail: dir.display().to_string(),
            },
            Err(e) => CheckItem {
                name: "deploy target",
                passed: false,
                detail: e.to_string(),
            },
        },
    );

    items.push(match crate::paths::content_dir(project_root) {
        Ok(dir) => CheckItem {
            name: "content directory",
            passed: true,
            detail: dir.display().to_string(),
        },
        Err(e) => CheckItem {
            name: "content directory",
            passed: false,
            detail: e.to_string(),
        },
    });

    items.push(match sass::probe(runner, &config.sass) {
        Ok(()) => CheckItem {
            name: "sass compiler",
            passed: true,
            detail: config.sass.command.clone(),
        },
        Err(e) => CheckItem {
            name: "sass compiler",
            passed: false,
            detail: e.to_string(),
        },
    });

    items
}
