// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch summaries over every `<prefix>-output.txt` / `<prefix>-expected.txt`
//! pair in a directory.

use crate::compare::{compare_files, ratio};
use crate::error::CheckError;
use std::path::{Path, PathBuf};

/// Suffix identifying an actual-output file
pub const OUTPUT_SUFFIX: &str = "-output.txt";
/// Suffix identifying the matching expected file
pub const EXPECTED_SUFFIX: &str = "-expected.txt";

/// Summary of one output/expected pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchEntry {
    pub prefix: String,
    pub correct: usize,
    /// Lines in the expected file
    pub total: usize,
}

impl BatchEntry {
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.total)
    }
}

/// Paths of the output and expected files for a prefix.
///
/// The prefix may include directories (`tests/parens`).
pub fn pair_paths(prefix: &str) -> (PathBuf, PathBuf) {
    (
        PathBuf::from(format!("{}{}", prefix, OUTPUT_SUFFIX)),
        PathBuf::from(format!("{}{}", prefix, EXPECTED_SUFFIX)),
    )
}

/// Find every prefix in `dir` that has an output file, sorted.
///
/// Entries that are not regular files, or whose names are not valid UTF-8,
/// are ignored. Whether the expected sibling exists is not checked here.
pub fn discover_prefixes(dir: &Path) -> Result<Vec<String>, CheckError> {
    let to_err = |source: std::io::Error| CheckError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut prefixes = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(to_err)? {
        let entry = entry.map_err(to_err)?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let Some(prefix) = name.strip_suffix(OUTPUT_SUFFIX) else {
            continue;
        };
        if entry.path().is_file() {
            prefixes.push(prefix.to_string());
        }
    }

    prefixes.sort();
    Ok(prefixes)
}

/// Compare one prefix's pair inside `dir`.
pub fn summarize_prefix(dir: &Path, prefix: &str) -> Result<BatchEntry, CheckError> {
    let output = dir.join(format!("{}{}", prefix, OUTPUT_SUFFIX));
    let expected = dir.join(format!("{}{}", prefix, EXPECTED_SUFFIX));
    let cmp = compare_files(&output, &expected)?;

    Ok(BatchEntry {
        prefix: prefix.to_string(),
        correct: cmp.right(),
        total: cmp.total(),
    })
}

/// Summarize every pair in `dir`. Fails on the first pair that cannot be read,
/// including an output file with no expected sibling.
pub fn summarize_dir(dir: &Path) -> Result<Vec<BatchEntry>, CheckError> {
    discover_prefixes(dir)?
        .iter()
        .map(|prefix| summarize_prefix(dir, prefix))
        .collect()
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
