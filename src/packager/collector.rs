//! Moving the archive into the output root

use crate::models::{PackError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Create `path` and any missing parents; leave an existing directory alone
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(PackError::filesystem(
            "create directory",
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
        ));
    }

    debug!(path = %path.display(), "creating output directory");
    fs::create_dir_all(path).map_err(|e| PackError::filesystem("create directory", path, e))
}

/// Copy `source_dir/file_name` to `dest_dir/file_name`, replacing any previous copy
pub fn relocate_archive(source_dir: &Path, file_name: &str, dest_dir: &Path) -> Result<PathBuf> {
    let source = source_dir.join(file_name);
    let destination = dest_dir.join(file_name);

    let bytes = fs::copy(&source, &destination)
        .map_err(|e| PackError::filesystem("copy", &source, e))?;
    debug!(bytes, to = %destination.display(), "archive copied");

    Ok(destination)
}
