//! Source discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::config::SOURCE_EXTENSION;

/// A source file picked up by the walk, read once in full.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the walk root, as shown in the merged output.
    pub relative_path: PathBuf,
    pub content: String,
}

/// Walk `root` recursively and yield every `.cs` file, read as UTF-8.
///
/// Files come back in filesystem enumeration order; the walk does not sort,
/// so body ordering in the merged output can vary between platforms. Only
/// the using header is ordered. Traversal, read, and decode errors abort the
/// run once the caller propagates them.
pub fn walk_sources(root: &Path) -> impl Iterator<Item = Result<SourceFile>> + '_ {
    WalkDir::new(root).into_iter().filter_map(move |entry| match entry {
        Ok(entry) => {
            let path = entry.into_path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION)
            {
                return None;
            }
            Some(read_source(root, path))
        }
        Err(err) => Some(Err(err).context("Failed to walk the input directory")),
    })
}

fn read_source(root: &Path, path: PathBuf) -> Result<SourceFile> {
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    // Text-mode read: fold Windows line endings so the extraction patterns
    // only ever see `\n`.
    let content = raw.replace("\r\n", "\n").replace('\r', "\n");
    let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
    Ok(SourceFile { path, relative_path, content })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_finds_nested_sources_only() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::create_dir_all(root.join("Elements")).expect("mkdir");
        fs::write(root.join("Alignment.cs"), "namespace LemonUI\n{\n}").expect("write");
        fs::write(root.join("Elements/Text.cs"), "namespace LemonUI.Elements\n{\n}")
            .expect("write");
        fs::write(root.join("README.md"), "# docs").expect("write");

        let mut files: Vec<SourceFile> =
            walk_sources(root).collect::<Result<_>>().expect("walk");
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let relative: Vec<String> =
            files.iter().map(|f| f.relative_path.display().to_string()).collect();
        assert_eq!(relative, vec!["Alignment.cs".to_string(), "Elements/Text.cs".to_string()]);
    }

    #[test]
    fn test_walk_folds_windows_line_endings() {
        let tmp = TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join("Crlf.cs"), "using System;\r\nnamespace LemonUI\r\n{\r\n}")
            .expect("write");

        let files: Vec<SourceFile> =
            walk_sources(tmp.path()).collect::<Result<_>>().expect("walk");
        assert_eq!(files.len(), 1);
        assert!(!files[0].content.contains('\r'));
        assert!(files[0].content.contains("namespace LemonUI\n{"));
    }

    #[test]
    fn test_walk_surfaces_decode_errors() {
        let tmp = TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join("Binary.cs"), [0xff, 0xfe, 0x00, 0x01]).expect("write");

        let results: Vec<Result<SourceFile>> = walk_sources(tmp.path()).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
