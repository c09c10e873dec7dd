//! The extension's `package.json`, as far as packaging cares

use serde::Deserialize;

use super::config::ARCHIVE_SUFFIX;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

impl ExtensionManifest {
    /// File name `vsce package` writes by default.
    pub fn expected_archive_name(&self) -> String {
        format!("{}-{}.{}", self.name, self.version, ARCHIVE_SUFFIX)
    }

    /// Name shown to the user, preferring `displayName`.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(display_name: Option<&str>) -> ExtensionManifest {
        ExtensionManifest {
            name: "vsrat-defaults".to_string(),
            version: "0.3.1".to_string(),
            display_name: display_name.map(str::to_string),
            publisher: None,
        }
    }

    #[test]
    fn test_expected_archive_name() {
        assert_eq!(manifest(None).expected_archive_name(), "vsrat-defaults-0.3.1.vsix");
    }

    #[test]
    fn test_label_prefers_display_name() {
        assert_eq!(manifest(Some("VSRat Defaults")).label(), "VSRat Defaults");
        assert_eq!(manifest(None).label(), "vsrat-defaults");
    }
}
