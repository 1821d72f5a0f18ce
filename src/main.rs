//! Themelift CLI - theme deployment for Liferay-style projects
//!
//! Usage: themelift <COMMAND>
//!
//! Commands:
//!   live-deploy  Push changed theme content into the deployed theme
//!   hard-deploy  Probe the compiler, then redeploy and recompile everything
//!   check        Validate configuration, paths and toolchain

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use themelift::config::{Config, ConfigWarning, Mode, CONFIG_FILE_NAME};
use themelift::pipeline::{self, DeployEvent};
use themelift::process::InheritedStdioRunner;

/// Themelift - theme deployment for Liferay-style projects
#[derive(Parser, Debug)]
#[command(name = "themelift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Push changed theme content into the already-deployed theme
    LiveDeploy {
        /// Theme project root
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Directory themes are deployed under (overrides deploy.dir)
        #[arg(long)]
        deploy_dir: Option<PathBuf>,

        /// Copy stylesheets verbatim and evict the cache, or compile them
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Deployed theme directory name (overrides theme.name)
        #[arg(long)]
        theme_name: Option<String>,
    },

    /// Probe the sass compiler, then copy statics and recompile every stylesheet
    HardDeploy {
        /// Theme project root
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Directory themes are deployed under (overrides deploy.dir)
        #[arg(long)]
        deploy_dir: Option<PathBuf>,

        /// Deployed theme directory name (overrides theme.name)
        #[arg(long)]
        theme_name: Option<String>,
    },

    /// Validate configuration, deploy target, content tree and toolchain
    Check {
        /// Theme project root
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Directory themes are deployed under (overrides deploy.dir)
        #[arg(long)]
        deploy_dir: Option<PathBuf>,

        /// Deployed theme directory name (overrides theme.name)
        #[arg(long)]
        theme_name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::LiveDeploy {
            project,
            deploy_dir,
            mode,
            theme_name,
        } => cmd_live_deploy(&project, deploy_dir, mode, theme_name, cli.json, cli.verbose),
        Commands::HardDeploy {
            project,
            deploy_dir,
            theme_name,
        } => cmd_hard_deploy(&project, deploy_dir, theme_name, cli.json, cli.verbose),
        Commands::Check {
            project,
            deploy_dir,
            theme_name,
        } => cmd_check(&project, deploy_dir, theme_name, cli.json),
    }
}

fn cmd_live_deploy(
    project: &Path,
    deploy_dir: Option<PathBuf>,
    mode: Option<Mode>,
    theme_name: Option<String>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let root = project_root(project)?;
    let (config, warnings) = load_config(&root)?;
    let config = apply_overrides(config, deploy_dir, mode, theme_name);
    report_warnings(&warnings, json);

    if !json {
        println!("🎨 Themelift Live Deploy");
        println!("Project: {}", root.display());
        println!("Mode: {}", config.deploy.mode);
        if verbose > 0 {
            println!("Statics: {}", config.content.static_resources.join(", "));
            println!("Stylesheets: {}", config.content.stylesheets.join(", "));
        }
        println!();
    }

    let mut runner = InheritedStdioRunner;
    pipeline::live_deploy(&config, &root, &mut runner, &mut |event| {
        render_event(&event, json)
    })?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "event": "live-deploy", "status": "success" })
        );
    } else {
        println!();
        println!("🟢 Live deploy complete");
    }

    Ok(())
}

fn cmd_hard_deploy(
    project: &Path,
    deploy_dir: Option<PathBuf>,
    theme_name: Option<String>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let root = project_root(project)?;
    let (config, warnings) = load_config(&root)?;
    let config = apply_overrides(config, deploy_dir, None, theme_name);
    report_warnings(&warnings, json);

    if !json {
        println!("🎨 Themelift Hard Deploy");
        println!("Project: {}", root.display());
        if verbose > 0 {
            println!("Statics: {}", config.content.static_resources.join(", "));
            println!("Stylesheets: {}", config.content.stylesheets.join(", "));
        }
        println!();
    }

    let mut runner = InheritedStdioRunner;
    pipeline::hard_deploy(&config, &root, &mut runner, &mut |event| {
        render_event(&event, json)
    })?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "event": "hard-deploy", "status": "success" })
        );
    } else {
        println!();
        println!("🟢 Hard deploy complete");
    }

    Ok(())
}

fn cmd_check(
    project: &Path,
    deploy_dir: Option<PathBuf>,
    theme_name: Option<String>,
    json: bool,
) -> Result<()> {
    let root = project_root(project)?;
    let (config, warnings) = load_config(&root)?;
    let config = apply_overrides(config, deploy_dir, None, theme_name);

    if !json {
        println!("🩺 Themelift Check");
        println!("Project: {}", root.display());
        println!();
    }

    let mut runner = InheritedStdioRunner;
    let items = pipeline::preflight(&config, &warnings, &root, &mut runner);
    let failed = items.iter().filter(|i| !i.passed).count();

    if json {
        for item in &items {
            println!(
                "{}",
                serde_json::json!({
                    "event": "check-item",
                    "name": item.name,
                    "passed": item.passed,
                    "detail": item.detail,
                })
            );
        }
        println!(
            "{}",
            serde_json::json!({
                "event": "check",
                "passed": items.len() - failed,
                "failed": failed,
                "success": failed == 0,
            })
        );
    } else {
        for item in &items {
            let icon = if item.passed { "✓" } else { "✗" };
            println!("  {} {} - {}", icon, item.name, item.detail);
        }
        println!();
        println!("Summary: {} passed, {} failed", items.len() - failed, failed);
    }

    if failed > 0 {
        if !json {
            println!();
            println!("🔴 Check found issues");
        }
        std::process::exit(1);
    }

    if !json {
        println!();
        println!("🟢 All checks passed!");
    }

    Ok(())
}

fn project_root(project: &Path) -> Result<PathBuf> {
    project
        .canonicalize()
        .with_context(|| format!("project root '{}' does not exist", project.display()))
}

fn load_config(root: &Path) -> Result<(Config, Vec<ConfigWarning>)> {
    let project_file = root.join(CONFIG_FILE_NAME);
    if project_file.exists() {
        let (config, warnings) = Config::load_with_warnings(&project_file)?;
        return Ok((config.with_env_overrides(), warnings));
    }
    Ok((Config::load_or_default(Some(root)), Vec::new()))
}

fn apply_overrides(
    mut config: Config,
    deploy_dir: Option<PathBuf>,
    mode: Option<Mode>,
    theme_name: Option<String>,
) -> Config {
    if let Some(dir) = deploy_dir {
        config.deploy.dir = Some(dir);
    }
    if let Some(mode) = mode {
        config.deploy.mode = mode;
    }
    if let Some(name) = theme_name {
        config.theme.name = Some(name);
    }
    config
}

fn report_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "config-warning",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                })
            );
        } else {
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            match &warning.suggestion {
                Some(suggestion) => eprintln!(
                    "⚠ Unknown config key '{}' in {} (did you mean '{}'?)",
                    warning.key, location, suggestion
                ),
                None => eprintln!("⚠ Unknown config key '{}' in {}", warning.key, location),
            }
        }
    }
}

fn render_event(event: &DeployEvent, json: bool) {
    if json {
        let line = match event {
            DeployEvent::Resolved {
                theme_name,
                deploy_dir,
            } => serde_json::json!({
                "event": "resolved",
                "theme": theme_name,
                "deploy_dir": deploy_dir.display().to_string(),
            }),
            DeployEvent::ResourceCopied { resource, files } => serde_json::json!({
                "event": "copied",
                "resource": resource,
                "files": files,
            }),
            DeployEvent::ResourceSkipped { resource } => serde_json::json!({
                "event": "skipped",
                "resource": resource,
            }),
            DeployEvent::CompilerProbed { command } => serde_json::json!({
                "event": "probed",
                "command": command,
            }),
            DeployEvent::EntryCompiled { entry } => serde_json::json!({
                "event": "compiled",
                "entry": entry,
            }),
            DeployEvent::EntryEvicted { entry } => serde_json::json!({
                "event": "evicted",
                "entry": entry,
            }),
        };
        println!("{line}");
    } else {
        match event {
            DeployEvent::Resolved {
                theme_name,
                deploy_dir,
            } => println!("📂 Theme '{}' at {}", theme_name, deploy_dir.display()),
            DeployEvent::ResourceCopied { resource, files } => {
                println!("  ✓ Copied {resource} ({files} files)")
            }
            DeployEvent::ResourceSkipped { resource } => {
                println!("  ⚠ No source file '{resource}' to copy")
            }
            DeployEvent::CompilerProbed { command } => {
                println!("  ✓ Compiler '{command}' available")
            }
            DeployEvent::EntryCompiled { entry } => println!("  ✓ Compiled css/{entry}"),
            DeployEvent::EntryEvicted { entry } => {
                println!("  ✓ Evicted css/{entry} from the sass cache")
            }
        }
    }
}
