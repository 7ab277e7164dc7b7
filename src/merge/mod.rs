//! Aggregation of per-file extraction results.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::extract;
use crate::scan::{self, SourceFile};

/// Everything accumulated over the walk: the unified using set and the
/// concatenated namespace bodies with their path comments.
///
/// The using set is keyed by exact, case-sensitive statement text, so the
/// iteration order of the `BTreeSet` already is the deduplicated,
/// lexicographically ascending sequence the output header needs.
#[derive(Debug, Default)]
pub struct MergeAccumulator {
    usings: BTreeSet<String>,
    bodies: String,
    files_merged: usize,
}

impl MergeAccumulator {
    /// Using statements, deduplicated and in ascending ordinal order.
    pub fn usings(&self) -> impl Iterator<Item = &str> {
        self.usings.iter().map(String::as_str)
    }

    pub fn unique_using_count(&self) -> usize {
        self.usings.len()
    }

    /// The concatenated namespace bodies, in the order files were walked.
    pub fn bodies(&self) -> &str {
        &self.bodies
    }

    pub fn files_merged(&self) -> usize {
        self.files_merged
    }
}

/// Fold one source file into the accumulator.
///
/// Skip-marked files contribute nothing, as do files without a project
/// namespace block; both are logged and neither aborts the run.
pub fn process_file(acc: &mut MergeAccumulator, file: &SourceFile) {
    let relative = file.relative_path.display();

    if extract::is_skip_marked(&file.content) {
        info!("Ignoring {relative}: File marked as to be skipped");
        return;
    }

    info!("Processing {relative}");

    let Some(body) = extract::namespace_block(&file.content) else {
        warn!("{relative} does not contain usable code");
        return;
    };

    let specific = extract::specific_usings(&file.content);
    let general = extract::general_usings(&file.content);
    info!("Found {} + {} using statements", specific.len(), general.len());

    acc.usings.extend(specific);
    acc.usings.extend(general);

    acc.bodies.push_str(&format!("\n\n// {relative}\n{body}"));
    acc.files_merged += 1;
}

/// Walk `input_dir` and fold every source file into a fresh accumulator.
pub fn merge_tree(input_dir: &Path) -> Result<MergeAccumulator> {
    let mut acc = MergeAccumulator::default();
    for file in scan::walk_sources(input_dir) {
        process_file(&mut acc, &file?);
    }
    Ok(acc)
}
