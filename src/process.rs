//! External command execution
//!
//! The deploy pipeline shells out to the sass compiler through the
//! [`ToolRunner`] seam, so pipeline tests can script outcomes without
//! spawning real processes.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// How a completed invocation exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit description for error messages.
    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external commands to completion.
pub trait ToolRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<RunStatus>;
}

/// Production runner: inherits all three stdio streams and blocks until the
/// child exits, so compiler output lands directly in the user's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct InheritedStdioRunner;

impl ToolRunner for InheritedStdioRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<RunStatus> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        let status = command.status()?;
        Ok(RunStatus {
            code: status.code(),
        })
    }
}

/// Scripted runner for tests: replays queued outcomes and records every
/// invocation it receives.
#[cfg(test)]
pub struct ScriptedRunner {
    outcomes: std::collections::VecDeque<io::Result<RunStatus>>,
    pub calls: Vec<Invocation>,
}

#[cfg(test)]
impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            outcomes: std::collections::VecDeque::new(),
            calls: Vec::new(),
        }
    }

    pub fn then_exit(mut self, code: i32) -> Self {
        self.outcomes.push_back(Ok(RunStatus { code: Some(code) }));
        self
    }

    pub fn then_success(self) -> Self {
        self.then_exit(0)
    }

    pub fn then_spawn_failure(mut self) -> Self {
        self.outcomes.push_back(Err(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        )));
        self
    }
}

#[cfg(test)]
impl ToolRunner for ScriptedRunner {
    fn run(&mut self, invocation: &Invocation) -> io::Result<RunStatus> {
        self.calls.push(invocation.clone());
        self.outcomes
            .pop_front()
            .unwrap_or(Ok(RunStatus { code: Some(0) }))
    }
}
