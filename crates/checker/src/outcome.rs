// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome codes carried in the first two characters of a result line.

use serde::{Serialize, Serializer};
use std::fmt;

/// Classification prefix of a result line.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeCode {
    /// `YE`: the pattern matched the target
    Match,
    /// `NO`: the pattern did not match
    NoMatch,
    /// `SY`: the pattern had a syntax error
    SyntaxError,
    /// `ER`: any other error
    OtherError,
    /// Any prefix outside the four known codes
    Other(String),
}

impl OutcomeCode {
    /// Known codes in report order.
    pub const KNOWN: [OutcomeCode; 4] = [
        OutcomeCode::Match,
        OutcomeCode::NoMatch,
        OutcomeCode::SyntaxError,
        OutcomeCode::OtherError,
    ];

    /// Extract the outcome code from a result line.
    ///
    /// The code is the first two characters; shorter lines use whatever
    /// they have, so an empty line yields `Other("")`.
    pub fn from_line(line: &str) -> Self {
        let end = line
            .char_indices()
            .nth(2)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len());
        Self::from_code(&line[..end])
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "YE" => OutcomeCode::Match,
            "NO" => OutcomeCode::NoMatch,
            "SY" => OutcomeCode::SyntaxError,
            "ER" => OutcomeCode::OtherError,
            other => OutcomeCode::Other(other.to_string()),
        }
    }

    /// The raw two-character code.
    pub fn code(&self) -> &str {
        match self {
            OutcomeCode::Match => "YE",
            OutcomeCode::NoMatch => "NO",
            OutcomeCode::SyntaxError => "SY",
            OutcomeCode::OtherError => "ER",
            OutcomeCode::Other(code) => code,
        }
    }

    /// Human-readable label used in the per-category breakdown.
    pub fn label(&self) -> &str {
        match self {
            OutcomeCode::Match => "Match",
            OutcomeCode::NoMatch => "No match",
            OutcomeCode::SyntaxError => "Syntax error",
            OutcomeCode::OtherError => "Other error",
            OutcomeCode::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OutcomeCode::Other(_))
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for OutcomeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
