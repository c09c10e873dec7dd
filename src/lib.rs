//! VS Code extension packaging helper
//!
//! Runs `vsce package` (directly, or through `npx` when `vsce` is not
//! installed) inside an extension source root, then copies the produced
//! `.vsix` archive into an output directory.

pub mod models;
pub mod parser;
pub mod packager;
pub mod runner;
pub mod tool;
pub mod report;
pub mod utils;

pub use models::{PackConfig, PackError, PackResult, Result, SelectionStrategy};
pub use runner::{ProcessRunner, SystemRunner};
pub use tool::{ToolInvocation, ToolStrategy};

use tracing::{info, warn};

/// Package the extension and collect its archive
///
/// Steps run strictly in order; the first failure aborts the run and nothing
/// already done is undone.
pub fn pack_extension(config: &PackConfig, runner: &dyn ProcessRunner) -> Result<PackResult> {
    info!(
        extension_root = %config.extension_root.display(),
        output_root = %config.output_root.display(),
        "starting packaging run"
    );

    // package.json is informational only
    let manifest = match parser::manifest::read_extension_manifest(&config.extension_root) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            warn!(err = %format!("{:#}", e), "extension manifest unavailable");
            None
        }
    };

    report::progress(&format!("Preparing {}", config.output_root.display()));
    packager::ensure_output_directory(&config.output_root)?;

    report::progress("Resolving vsce");
    let tool = tool::resolve_tool_invocation(runner, &config.strategies)?;

    report::progress(&format!("Packaging with {}", tool));
    packager::invoke_packaging(runner, &tool, &config.extension_root)?;

    report::progress("Collecting archive");
    let archive_name = packager::locate_archive(&config.extension_root, config.selection)?;
    let destination =
        packager::relocate_archive(&config.extension_root, &archive_name, &config.output_root)?;

    Ok(PackResult {
        tool,
        archive_name,
        destination,
        manifest,
    })
}
