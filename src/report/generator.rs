//! Summary of a finished packaging run

use crate::models::PackResult;

/// Plain-text summary lines, one detail per line
pub fn generate_summary(result: &PackResult) -> String {
    let mut summary = String::new();

    if let Some(manifest) = &result.manifest {
        summary.push_str(&format!("  - Extension: {} v{}\n", manifest.label(), manifest.version));
    }
    summary.push_str(&format!("  - Tool: {}\n", result.tool));
    summary.push_str(&format!("  - Archive: {}\n", result.archive_name));
    summary.push_str(&format!("  - Output: {}\n", result.destination.display()));

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtensionManifest;
    use crate::tool::ToolInvocation;
    use std::path::PathBuf;

    fn result(manifest: Option<ExtensionManifest>) -> PackResult {
        PackResult {
            tool: ToolInvocation::direct(),
            archive_name: "demo-1.0.0.vsix".to_string(),
            destination: PathBuf::from("/out/demo-1.0.0.vsix"),
            manifest,
        }
    }

    #[test]
    fn test_summary_without_manifest() {
        assert_eq!(
            generate_summary(&result(None)),
            "  - Tool: vsce\n  - Archive: demo-1.0.0.vsix\n  - Output: /out/demo-1.0.0.vsix\n"
        );
    }

    #[test]
    fn test_summary_with_manifest() {
        let manifest = ExtensionManifest {
            name: "demo".to_string(),
            version: "1.0.0".to_string(),
            display_name: Some("Demo".to_string()),
            publisher: None,
        };
        let summary = generate_summary(&result(Some(manifest)));
        assert!(summary.starts_with("  - Extension: Demo v1.0.0\n"));
    }
}
