//! Merged document rendering and output write.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{BANNER, PLATFORM_SYMBOL};

/// Fill the output template.
///
/// `timestamp` is pre-formatted by the caller so runs can be reproduced
/// byte-for-byte under test. The body blob carries its own leading blank
/// lines per file on top of the blank line in the template.
pub fn render_document<'a, I>(
    timestamp: &str,
    comment: Option<&str>,
    usings: I,
    bodies: &str,
) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let statements =
        usings.into_iter().map(|using| format!("using {using};")).collect::<Vec<_>>().join("\n");
    let comment = comment.map(|text| format!("\n// {text}")).unwrap_or_default();
    format!(
        "{BANNER}\n// Generated on {timestamp}{comment}\n#define {PLATFORM_SYMBOL}\n{statements}\n\n{bodies}\n"
    )
}

/// Write the merged document, creating the destination's parent directory
/// if it is absent. An existing file is silently overwritten.
pub fn write_output(output_path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output_path, document)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    info!("File exported as {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const FROZEN: &str = "2024-05-01 10:00:00.000000";

    #[test]
    fn test_render_document_without_comment() {
        let document = render_document(
            FROZEN,
            None,
            ["System", "System.Linq"],
            "\n\n// A.cs\nnamespace LemonUI\n{\n}",
        );

        assert_eq!(
            document,
            "// LemonUI for RageMP\n\
             // Generated on 2024-05-01 10:00:00.000000\n\
             #define RAGEMP\n\
             using System;\n\
             using System.Linq;\n\
             \n\
             \n\
             \n\
             // A.cs\n\
             namespace LemonUI\n\
             {\n\
             }\n"
        );
    }

    #[test]
    fn test_render_document_appends_comment_to_generated_line() {
        let document = render_document(FROZEN, Some("Nightly build"), ["System"], "");
        assert!(document
            .contains("// Generated on 2024-05-01 10:00:00.000000\n// Nightly build\n#define"));
    }

    #[test]
    fn test_render_document_with_nothing_to_merge() {
        let document = render_document(FROZEN, None, [], "");
        assert_eq!(
            document,
            "// LemonUI for RageMP\n// Generated on 2024-05-01 10:00:00.000000\n#define RAGEMP\n\n\n\n"
        );
    }

    #[test]
    fn test_write_output_creates_parent_and_overwrites() {
        let tmp = TempDir::new().expect("tmp dir");
        let destination = tmp.path().join("dist/nested/LemonUI.RageMP.cs");

        write_output(&destination, "first\n").expect("first write");
        write_output(&destination, "second\n").expect("second write");

        assert_eq!(fs::read_to_string(&destination).expect("read"), "second\n");
    }
}
