// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-by-line comparison of an actual-output file against an expected file.
//!
//! Lines are paired positionally over the common prefix of both files. The
//! accuracy denominator is always the full length of the expected file, so
//! a truncated output file is penalized for every line it never produced.

use crate::error::CheckError;
use crate::lines::read_lines;
use crate::outcome::OutcomeCode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Per-outcome counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryTally {
    /// Lines whose expected outcome was this code
    pub expected: usize,
    /// Of those, lines the output got right
    pub correct: usize,
    /// Lines where the output claimed this code but something else was expected
    pub extra: usize,
}

impl CategoryTally {
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.expected)
    }
}

/// A line pair whose outcome codes differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 1-based line number
    pub line: usize,
    pub expected: String,
    pub actual: String,
}

/// Result of comparing two result files. Built once by [`compare`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison {
    tallies: BTreeMap<OutcomeCode, CategoryTally>,
    right: usize,
    total: usize,
    actual_len: usize,
    mismatches: Vec<Mismatch>,
}

impl Comparison {
    /// Number of pairs whose outcome codes agree.
    pub fn right(&self) -> usize {
        self.right
    }

    /// Number of lines in the expected file.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of lines in the actual-output file.
    pub fn actual_len(&self) -> usize {
        self.actual_len
    }

    /// Overall accuracy, `right / total`. Zero when the expected file is empty.
    pub fn accuracy(&self) -> f64 {
        ratio(self.right, self.total)
    }

    /// Expected lines the output never reached.
    pub fn missing(&self) -> usize {
        self.total.saturating_sub(self.actual_len)
    }

    /// `missing / total`, present only when the output finished early.
    pub fn missing_ratio(&self) -> Option<f64> {
        match self.missing() {
            0 => None,
            missing => Some(ratio(missing, self.total)),
        }
    }

    /// Output lines beyond the end of the expected file.
    pub fn surplus(&self) -> usize {
        self.actual_len.saturating_sub(self.total)
    }

    /// Tally for one code; all zeros if the code never appeared.
    pub fn tally(&self, code: &OutcomeCode) -> CategoryTally {
        self.tallies.get(code).copied().unwrap_or_default()
    }

    /// Tallies for the four known codes, in report order.
    pub fn known_tallies(&self) -> Vec<(OutcomeCode, CategoryTally)> {
        OutcomeCode::KNOWN
            .into_iter()
            .map(|code| {
                let tally = self.tally(&code);
                (code, tally)
            })
            .collect()
    }

    /// Every code seen on either side, including unknown ones.
    pub fn tallies(&self) -> impl Iterator<Item = (&OutcomeCode, &CategoryTally)> {
        self.tallies.iter()
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
}

/// Compare actual lines against expected lines.
pub fn compare<A, E>(actual: &[A], expected: &[E]) -> Comparison
where
    A: AsRef<str>,
    E: AsRef<str>,
{
    let mut tallies: BTreeMap<OutcomeCode, CategoryTally> = BTreeMap::new();
    let mut right = 0;
    let mut mismatches = Vec::new();

    for (idx, (got, want)) in actual.iter().zip(expected).enumerate() {
        let (got, want) = (got.as_ref(), want.as_ref());
        let got_code = OutcomeCode::from_line(got);
        let want_code = OutcomeCode::from_line(want);

        if got_code == want_code {
            let tally = tallies.entry(want_code).or_default();
            tally.expected += 1;
            tally.correct += 1;
            right += 1;
        } else {
            tallies.entry(want_code).or_default().expected += 1;
            tallies.entry(got_code).or_default().extra += 1;
            mismatches.push(Mismatch {
                line: idx + 1,
                expected: want.to_string(),
                actual: got.to_string(),
            });
        }
    }

    Comparison {
        tallies,
        right,
        total: expected.len(),
        actual_len: actual.len(),
        mismatches,
    }
}

/// Load both files and compare them. The output file is read first.
pub fn compare_files(output: &Path, expected: &Path) -> Result<Comparison, CheckError> {
    let actual = read_lines(output)?;
    let expected = read_lines(expected)?;
    Ok(compare(&actual, &expected))
}

/// `numerator / denominator`, or zero for an empty denominator.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
