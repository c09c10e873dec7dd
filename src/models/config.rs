//! Packaging run configuration

use crate::tool::{default_strategies, ToolStrategy};
use std::path::{Path, PathBuf};

/// File extension of the archives `vsce package` writes.
pub const ARCHIVE_SUFFIX: &str = "vsix";

/// Extension source root, relative to the project root.
pub const EXTENSION_SUBDIR: &[&str] = &["extensions-defaults", "vsrat-defaults", "extension"];

/// Collection directory for packaged archives, relative to the project root.
pub const OUTPUT_SUBDIR: &str = "extensions-extra";

/// How to pick one archive when several sit in the extension root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Greatest file name in byte order. `a-2.0.0` beats `a-10.0.0`.
    #[default]
    Lexicographic,
    /// Highest trailing `MAJOR.MINOR.PATCH[-pre]` version.
    SemanticVersion,
    /// Most recently modified file.
    Newest,
}

#[derive(Debug, Clone)]
pub struct PackConfig {
    pub extension_root: PathBuf,
    pub output_root: PathBuf,
    pub selection: SelectionStrategy,
    pub strategies: Vec<ToolStrategy>,
}

impl PackConfig {
    pub fn new(extension_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            extension_root: extension_root.into(),
            output_root: output_root.into(),
            selection: SelectionStrategy::default(),
            strategies: default_strategies(),
        }
    }

    /// Standard layout below a project root.
    pub fn from_project_root(root: &Path) -> Self {
        let extension_root = EXTENSION_SUBDIR
            .iter()
            .fold(root.to_path_buf(), |path, part| path.join(part));
        Self::new(extension_root, root.join(OUTPUT_SUBDIR))
    }

    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<ToolStrategy>) -> Self {
        self.strategies = strategies;
        self
    }
}
