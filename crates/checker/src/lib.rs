// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result file checker for regular-expression matching experiments.
//!
//! Each result line starts with a two-character outcome code (`YE`, `NO`,
//! `SY`, `ER`). The checker pairs an actual-output file with an expected
//! file line by line, tallies accuracy per outcome, and reports the lines
//! that disagree. A batch mode summarizes every `<prefix>-output.txt` /
//! `<prefix>-expected.txt` pair in a directory.

pub mod batch;
pub mod cli;
pub mod compare;
pub mod diagnostic;
pub mod error;
pub mod lines;
pub mod outcome;
pub mod report;
pub mod runner;

pub use compare::{compare, compare_files, CategoryTally, Comparison, Mismatch};
pub use error::CheckError;
pub use outcome::OutcomeCode;
