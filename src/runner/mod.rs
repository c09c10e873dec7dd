//! Blocking execution of external commands
//!
//! Everything that spawns a process goes through [`ProcessRunner`], so the
//! packaging pipeline can be driven by a scripted runner in tests.

use crate::utils::helpers::format_command_line;
use colored::*;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// What happens to the child's standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Share the terminal, so the user sees live output.
    Inherit,
    /// Discard all output.
    Quiet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            output: OutputMode::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Command line as a user would type it.
    pub fn command_line(&self) -> String {
        format_command_line(&self.program, &self.args)
    }
}

/// How a finished child exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

pub trait ProcessRunner {
    /// Run the command to completion. `Err` means it could not be started.
    fn run(&self, spec: &CommandSpec) -> io::Result<RunStatus>;
}

/// Runs commands on the host, echoing interactive ones first.
///
/// On Windows a bare program name is resolved to a `<program>.cmd` shim on
/// `PATH` when one exists, since npm installs `vsce` and `npx` that way.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

/// First `<program>.cmd` found in the directories of `search_path`
#[cfg_attr(not(windows), allow(dead_code))]
pub fn find_cmd_shim(program: &str, search_path: &OsStr) -> Option<PathBuf> {
    if Path::new(program).extension().is_some() {
        return None;
    }
    std::env::split_paths(search_path)
        .map(|dir| dir.join(format!("{}.cmd", program)))
        .find(|candidate| candidate.is_file())
}

#[cfg(windows)]
fn program_path(program: &str) -> OsString {
    std::env::var_os("PATH")
        .and_then(|path| find_cmd_shim(program, &path))
        .map(PathBuf::into_os_string)
        .unwrap_or_else(|| program.into())
}

#[cfg(not(windows))]
fn program_path(program: &str) -> OsString {
    program.into()
}

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<RunStatus> {
        let mut command = Command::new(program_path(&spec.program));
        command.args(&spec.args);
        if let Some(dir) = &spec.current_dir {
            command.current_dir(dir);
        }

        match spec.output {
            OutputMode::Inherit => {
                println!("{}", format!("> {}", spec.command_line()).dimmed());
                command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            OutputMode::Quiet => {
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
        }

        debug!(command = %spec.command_line(), cwd = ?spec.current_dir, "spawning");
        let status = command.status()?;
        debug!(exit_code = ?status.code(), "command finished");
        Ok(status.into())
    }
}
