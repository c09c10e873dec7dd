//! Running `vsce package` and collecting its output

pub mod collector;
pub mod locator;

pub use collector::{ensure_output_directory, relocate_archive};
pub use locator::{locate_archive, locate_produced_archive, select_archive, ArchiveCandidate};

use crate::models::{PackError, Result};
use crate::runner::{OutputMode, ProcessRunner};
use crate::tool::ToolInvocation;
use std::path::Path;
use tracing::info;

pub const PACKAGE_SUBCOMMAND: &str = "package";

/// Run `<tool> package` inside `working_directory` with the terminal attached
pub fn invoke_packaging(
    runner: &dyn ProcessRunner,
    tool: &ToolInvocation,
    working_directory: &Path,
) -> Result<()> {
    let spec = tool
        .command(PACKAGE_SUBCOMMAND)
        .current_dir(working_directory)
        .output(OutputMode::Inherit);
    let command = spec.command_line();

    info!(%command, cwd = %working_directory.display(), "packaging");
    let status = runner.run(&spec).map_err(|e| PackError::PackagingFailed {
        command: command.clone(),
        reason: format!("could not start: {}", e),
    })?;

    if !status.success() {
        return Err(PackError::PackagingFailed {
            command,
            reason: status.describe(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CommandSpec, RunStatus};
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    struct FixedRunner {
        result: fn() -> io::Result<RunStatus>,
        seen: RefCell<Option<CommandSpec>>,
    }

    impl ProcessRunner for FixedRunner {
        fn run(&self, spec: &CommandSpec) -> io::Result<RunStatus> {
            *self.seen.borrow_mut() = Some(spec.clone());
            (self.result)()
        }
    }

    #[test]
    fn test_package_runs_in_working_directory() {
        let runner = FixedRunner {
            result: || Ok(RunStatus::from_code(0)),
            seen: RefCell::new(None),
        };
        invoke_packaging(&runner, &ToolInvocation::direct(), Path::new("/ext")).unwrap();

        let seen = runner.seen.borrow().clone().unwrap();
        assert_eq!(seen.command_line(), "vsce package");
        assert_eq!(seen.current_dir, Some(PathBuf::from("/ext")));
        assert_eq!(seen.output, OutputMode::Inherit);
    }

    #[test]
    fn test_nonzero_exit_surfaces_code() {
        let runner = FixedRunner {
            result: || Ok(RunStatus::from_code(2)),
            seen: RefCell::new(None),
        };
        let err = invoke_packaging(&runner, &ToolInvocation::npx(), Path::new("/ext")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "`npx --yes @vscode/vsce package` failed: exited with code 2"
        );
    }

    #[test]
    fn test_spawn_failure() {
        let runner = FixedRunner {
            result: || Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
            seen: RefCell::new(None),
        };
        let err = invoke_packaging(&runner, &ToolInvocation::direct(), Path::new("/ext")).unwrap_err();
        assert!(matches!(err, PackError::PackagingFailed { .. }));
    }
}
