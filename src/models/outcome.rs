//! Result of a packaging run

use super::manifest::ExtensionManifest;
use crate::tool::ToolInvocation;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PackResult {
    /// Invocation form the tool was resolved to.
    pub tool: ToolInvocation,
    pub archive_name: String,
    pub destination: PathBuf,
    /// `None` when `package.json` could not be read.
    pub manifest: Option<ExtensionManifest>,
}

impl PackResult {
    /// Whether the collected archive carries the name the manifest predicts.
    pub fn matches_expected_name(&self) -> Option<bool> {
        self.manifest
            .as_ref()
            .map(|m| m.expected_archive_name() == self.archive_name)
    }
}
