//! `package.json` parsing

use crate::models::ExtensionManifest;
use anyhow::{Context, Result};
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// Parse package.json from bytes
pub fn parse_extension_manifest(content: &[u8]) -> Result<ExtensionManifest> {
    let manifest: ExtensionManifest =
        serde_json::from_slice(content).context("Failed to parse package.json")?;

    if manifest.name.trim().is_empty() {
        anyhow::bail!("package.json has an empty name");
    }
    if manifest.version.trim().is_empty() {
        anyhow::bail!("package.json has an empty version");
    }

    Ok(manifest)
}

/// Read package.json from an extension root
pub fn read_extension_manifest(extension_root: &Path) -> Result<ExtensionManifest> {
    let path = extension_root.join(MANIFEST_FILE);
    let content =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_extension_manifest(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_package_json() {
        let json = br#"{
            "name": "vsrat-defaults",
            "displayName": "VSRat Defaults",
            "publisher": "vsrat",
            "version": "0.3.1",
            "engines": { "vscode": "^1.80.0" },
            "contributes": {}
        }"#;

        let manifest = parse_extension_manifest(json).unwrap();
        assert_eq!(manifest.name, "vsrat-defaults");
        assert_eq!(manifest.version, "0.3.1");
        assert_eq!(manifest.display_name.as_deref(), Some("VSRat Defaults"));
        assert_eq!(manifest.publisher.as_deref(), Some("vsrat"));
    }

    #[test]
    fn test_missing_version_rejected() {
        assert!(parse_extension_manifest(br#"{ "name": "x" }"#).is_err());
        assert!(parse_extension_manifest(br#"{ "name": "x", "version": " " }"#).is_err());
    }

    #[test]
    fn test_read_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(MANIFEST_FILE),
            r#"{ "name": "demo", "version": "1.0.0" }"#,
        )
        .unwrap();

        let manifest = read_extension_manifest(temp_dir.path()).unwrap();
        assert_eq!(manifest.expected_archive_name(), "demo-1.0.0.vsix");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_extension_manifest(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("package.json"));
    }
}
