//! Locating a working `vsce`
//!
//! Candidates are probed in order with `--version`; the first that exits
//! successfully is used for the real `package` run.

use crate::models::{PackError, Result};
use crate::runner::{CommandSpec, OutputMode, ProcessRunner};
use crate::utils::helpers::format_command_line;
use std::fmt;
use tracing::{debug, info};

pub const VSCE_PROGRAM: &str = "vsce";
pub const NPX_PROGRAM: &str = "npx";
pub const VSCE_PACKAGE: &str = "@vscode/vsce";

/// A command prefix that runs the packaging tool when given a subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub prefix_args: Vec<String>,
}

impl ToolInvocation {
    pub fn new<I, S>(program: impl Into<String>, prefix_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            prefix_args: prefix_args.into_iter().map(Into::into).collect(),
        }
    }

    /// `vsce` found on `PATH`.
    pub fn direct() -> Self {
        Self::new(VSCE_PROGRAM, Vec::<String>::new())
    }

    /// `vsce` fetched and run on demand by `npx`.
    pub fn npx() -> Self {
        Self::new(NPX_PROGRAM, ["--yes", VSCE_PACKAGE])
    }

    /// Compose the prefix with a subcommand.
    pub fn command(&self, subcommand: &str) -> CommandSpec {
        CommandSpec::new(self.program.clone())
            .args(self.prefix_args.iter().cloned())
            .arg(subcommand)
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_command_line(&self.program, &self.prefix_args))
    }
}

/// One candidate invocation and how its probe should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStrategy {
    pub invocation: ToolInvocation,
    pub probe_output: OutputMode,
}

impl ToolStrategy {
    pub fn new(invocation: ToolInvocation, probe_output: OutputMode) -> Self {
        Self {
            invocation,
            probe_output,
        }
    }
}

/// Direct `vsce` probed silently, then `npx` with visible output since it may download.
pub fn default_strategies() -> Vec<ToolStrategy> {
    vec![
        ToolStrategy::new(ToolInvocation::direct(), OutputMode::Quiet),
        ToolStrategy::new(ToolInvocation::npx(), OutputMode::Inherit),
    ]
}

/// Return the first strategy whose `--version` probe succeeds.
pub fn resolve_tool_invocation(
    runner: &dyn ProcessRunner,
    strategies: &[ToolStrategy],
) -> Result<ToolInvocation> {
    for strategy in strategies {
        let probe = strategy
            .invocation
            .command("--version")
            .output(strategy.probe_output);

        match runner.run(&probe) {
            Ok(status) if status.success() => {
                info!(tool = %strategy.invocation, "packaging tool resolved");
                return Ok(strategy.invocation.clone());
            }
            Ok(status) => {
                debug!(tool = %strategy.invocation, status = %status.describe(), "probe failed");
            }
            Err(e) => {
                debug!(tool = %strategy.invocation, err = %e, "probe could not start");
            }
        }
    }

    Err(PackError::ToolUnavailable {
        tried: strategies
            .iter()
            .map(|s| s.invocation.to_string())
            .collect(),
    })
}
