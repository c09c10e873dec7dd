//! Error taxonomy for the packaging pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a packaging run can abort.
#[derive(Debug, Error)]
pub enum PackError {
    /// Neither the direct nor any fallback invocation of the packaging tool worked.
    #[error("packaging tool not available (tried: {})", tried.join(", "))]
    ToolUnavailable { tried: Vec<String> },

    /// The packaging tool ran but did not succeed.
    #[error("`{command}` failed: {reason}")]
    PackagingFailed { command: String, reason: String },

    /// The tool reported success but no archive is present.
    #[error("no .{suffix} archive produced in {}", directory.display())]
    NoArchiveProduced { directory: PathBuf, suffix: String },

    #[error("failed to {operation} {}: {source}", path.display())]
    FilesystemError {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PackError {
    pub fn filesystem(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FilesystemError {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_unavailable_lists_attempts() {
        let err = PackError::ToolUnavailable {
            tried: vec!["vsce".to_string(), "npx --yes @vscode/vsce".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "packaging tool not available (tried: vsce, npx --yes @vscode/vsce)"
        );
    }

    #[test]
    fn test_filesystem_error_names_path() {
        let err = PackError::filesystem(
            "copy",
            "/tmp/out/demo.vsix",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to copy /tmp/out/demo.vsix: denied");
    }
}
