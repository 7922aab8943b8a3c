// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::batch::pair_paths;
use crate::report::DEFAULT_MISMATCH_FILE;

const AFTER_HELP: &str = "\
Modes:
  checker <output-file> <expected-file>
      Compares the starts of lines of output-file and expected-file and reports.
  checker <prefix>
      Compares <prefix>-output.txt and <prefix>-expected.txt.
  checker --all [<dir>]
      For each file *-output.txt, produces summary statistics only.

Prints statistics for the total and for each possible result.
Writes lines where output did not match expected to mismatches.txt.";

/// Regex result checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "checker",
    version,
    about = "Compare regex experiment results against expected outcomes",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Output and expected files, or a single shared prefix
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Summarize every <prefix>-output.txt in DIR
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub all: Option<PathBuf>,

    /// Where to write the mismatch list
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MISMATCH_FILE)]
    pub mismatches: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// What a parsed command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Wrong number of arguments: show usage and exit successfully
    Usage,
    /// Full comparison of one output/expected pair
    Pair { output: PathBuf, expected: PathBuf },
    /// Summary line for every pair in a directory
    Batch { dir: PathBuf },
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        match (&self.all, self.files.as_slice()) {
            (Some(dir), []) => Invocation::Batch { dir: dir.clone() },
            (Some(_), _) => Invocation::Usage,
            (None, [prefix]) => {
                let (output, expected) = pair_paths(prefix);
                Invocation::Pair { output, expected }
            }
            (None, [output, expected]) => Invocation::Pair {
                output: PathBuf::from(output),
                expected: PathBuf::from(expected),
            },
            (None, _) => Invocation::Usage,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
