// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading result files as ordered line sequences.

use crate::error::CheckError;
use std::path::Path;

/// Read a result file into its lines, in file order.
///
/// Line terminators (`\n` or `\r\n`) are stripped. A final line without a
/// terminator still counts, and a trailing terminator does not add an
/// empty line.
pub fn read_lines(path: &Path) -> Result<Vec<String>, CheckError> {
    let content = std::fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&content))
}

pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
