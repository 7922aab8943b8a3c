// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pair and batch modes, wired from comparison through reporting.

use crate::batch::{summarize_dir, BatchEntry};
use crate::cli::OutputFormat;
use crate::compare::{compare_files, Comparison};
use crate::diagnostic::print_warning;
use crate::error::CheckError;
use crate::report::{write_batch_json, write_batch_text, write_json, write_mismatches, write_text};
use std::io::Write;
use std::path::Path;

/// Compare one output/expected pair and report to `out`.
///
/// The mismatch list is written to `mismatch_path` only when at least one
/// pair disagrees; otherwise any existing file there is left alone.
pub fn run_pair<W: Write>(
    out: &mut W,
    output: &Path,
    expected: &Path,
    mismatch_path: &Path,
    format: OutputFormat,
) -> Result<Comparison, CheckError> {
    let cmp = compare_files(output, expected)?;

    if cmp.surplus() > 0 {
        print_warning(format_args!(
            "output has {} more lines than expected; extra lines ignored",
            cmp.surplus()
        ));
    }

    let written = if cmp.mismatches().is_empty() {
        None
    } else {
        write_mismatches(mismatch_path, cmp.mismatches())?;
        Some(mismatch_path)
    };

    match format {
        OutputFormat::Text => write_text(out, &cmp, written)?,
        OutputFormat::Json => write_json(out, &cmp, written)?,
    }
    Ok(cmp)
}

/// Summarize every pair in `dir` and report to `out`.
///
/// Nothing is printed if any pair fails to load.
pub fn run_batch<W: Write>(
    out: &mut W,
    dir: &Path,
    format: OutputFormat,
) -> Result<Vec<BatchEntry>, CheckError> {
    let entries = summarize_dir(dir)?;
    match format {
        OutputFormat::Text => write_batch_text(out, &entries)?,
        OutputFormat::Json => write_batch_json(out, &entries)?,
    }
    Ok(entries)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
