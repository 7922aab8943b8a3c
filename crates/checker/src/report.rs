// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of comparison results: text report, JSON summary, and the
//! mismatch file.

use crate::batch::BatchEntry;
use crate::compare::{Comparison, Mismatch};
use crate::error::CheckError;
use crate::outcome::OutcomeCode;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default mismatch report location, relative to the working directory
pub const DEFAULT_MISMATCH_FILE: &str = "mismatches.txt";

/// Width of the prefix column in batch output
pub const PREFIX_WIDTH: usize = 12;

/// Width of the label column in the per-category breakdown
const LABEL_WIDTH: usize = 12;

/// Format a ratio as a percentage with two decimals, e.g. `66.67%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Like [`percent`] but with a leading sign column. Ratios are never
/// negative, so the column is always a space.
pub fn signed_percent(value: f64) -> String {
    format!(" {}", percent(value))
}

fn total_line(cmp: &Comparison) -> String {
    format!(
        "Total: {} {}/{}",
        percent(cmp.accuracy()),
        cmp.right(),
        cmp.total()
    )
}

/// Write the human-readable report for a pair comparison.
///
/// `mismatch_file` is the path the mismatch list was written to, if any.
pub fn write_text<W: Write>(
    out: &mut W,
    cmp: &Comparison,
    mismatch_file: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "{}", total_line(cmp))?;
    writeln!(out, "Proportions of expected results right:")?;
    for (code, tally) in cmp.known_tallies() {
        writeln!(
            out,
            "\t{:<width$} {} {}/{} + {} unexpected",
            code.label(),
            signed_percent(tally.accuracy()),
            tally.correct,
            tally.expected,
            tally.extra,
            width = LABEL_WIDTH
        )?;
    }

    if let Some(ratio) = cmp.missing_ratio() {
        writeln!(
            out,
            "Missing: {} {}/{}",
            percent(ratio),
            cmp.missing(),
            cmp.total()
        )?;
        writeln!(out, "Output file finished early!")?;
    }

    if let Some(path) = mismatch_file {
        writeln!(
            out,
            "Wrote list of {} mismatched lines to {}",
            cmp.mismatches().len(),
            path.display()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", total_line(cmp))
}

/// Render mismatches as three-line blocks.
pub fn render_mismatches(mismatches: &[Mismatch]) -> String {
    let mut text = String::new();
    for m in mismatches {
        text.push_str(&format!("Mismatch on line {}:\n", m.line));
        text.push_str(&format!("  Expected: {}\n", m.expected));
        text.push_str(&format!("  But got:  {}\n", m.actual));
    }
    text
}

/// Write the mismatch list to `path`, replacing any previous report.
pub fn write_mismatches(path: &Path, mismatches: &[Mismatch]) -> Result<(), CheckError> {
    let to_err = |source: io::Error| CheckError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(to_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_mismatches(mismatches).as_bytes())
        .map_err(to_err)?;
    writer.flush().map_err(to_err)
}

#[derive(Debug, Serialize)]
struct CategorySummary<'a> {
    code: OutcomeCode,
    label: &'a str,
    expected: usize,
    correct: usize,
    extra: usize,
    accuracy: f64,
}

#[derive(Debug, Serialize)]
struct MissingSummary {
    lines: usize,
    ratio: f64,
}

#[derive(Debug, Serialize)]
struct PairSummary<'a> {
    right: usize,
    total: usize,
    accuracy: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<MissingSummary>,
    categories: Vec<CategorySummary<'a>>,
    mismatches: &'a [Mismatch],
    #[serde(skip_serializing_if = "Option::is_none")]
    mismatch_file: Option<&'a Path>,
}

/// Write the pair comparison as a pretty-printed JSON object.
pub fn write_json<W: Write>(
    out: &mut W,
    cmp: &Comparison,
    mismatch_file: Option<&Path>,
) -> Result<(), CheckError> {
    let known = cmp.known_tallies();
    let summary = PairSummary {
        right: cmp.right(),
        total: cmp.total(),
        accuracy: cmp.accuracy(),
        missing: cmp.missing_ratio().map(|ratio| MissingSummary {
            lines: cmp.missing(),
            ratio,
        }),
        categories: known
            .iter()
            .map(|(code, tally)| CategorySummary {
                code: code.clone(),
                label: code.label(),
                expected: tally.expected,
                correct: tally.correct,
                extra: tally.extra,
                accuracy: tally.accuracy(),
            })
            .collect(),
        mismatches: cmp.mismatches(),
        mismatch_file,
    };
    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(())
}

/// One batch summary line: prefix padded to [`PREFIX_WIDTH`], then percentage.
pub fn batch_line(entry: &BatchEntry) -> String {
    format!(
        "{:<width$}{}",
        entry.prefix,
        percent(entry.accuracy()),
        width = PREFIX_WIDTH
    )
}

pub fn write_batch_text<W: Write>(out: &mut W, entries: &[BatchEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", batch_line(entry))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct BatchSummary<'a> {
    prefix: &'a str,
    correct: usize,
    total: usize,
    accuracy: f64,
}

pub fn write_batch_json<W: Write>(out: &mut W, entries: &[BatchEntry]) -> Result<(), CheckError> {
    let summaries: Vec<BatchSummary<'_>> = entries
        .iter()
        .map(|entry| BatchSummary {
            prefix: &entry.prefix,
            correct: entry.correct,
            total: entry.total,
            accuracy: entry.accuracy(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &summaries)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
