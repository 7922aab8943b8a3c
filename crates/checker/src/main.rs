// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result checker binary entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::Write;

use checker::cli::{Cli, Invocation};
use checker::diagnostic::print_error;
use checker::runner::{run_batch, run_pair};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        print_error(e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match cli.invocation() {
        // Wrong argument count is not a failure
        Invocation::Usage => {
            writeln!(stdout, "{}", Cli::command().render_help())?;
        }
        Invocation::Pair { output, expected } => {
            run_pair(&mut stdout, &output, &expected, &cli.mismatches, cli.format)?;
        }
        Invocation::Batch { dir } => {
            run_batch(&mut stdout, &dir, cli.format)?;
        }
    }
    Ok(())
}
