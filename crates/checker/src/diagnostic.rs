// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning lines on stderr.
//!
//! Messages are colored only when stderr is a terminal, so redirected
//! output stays plain.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print a fatal error to stderr.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Print a non-fatal warning to stderr.
pub fn print_warning(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_tagged(writer, RED, "Error", msg, is_terminal);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_tagged(writer, YELLOW, "Warning", msg, is_terminal);
}

fn write_tagged<W: Write>(
    writer: &mut W,
    color: &str,
    tag: &str,
    msg: impl Display,
    is_terminal: bool,
) {
    // Nowhere left to report a failed stderr write
    let _ = if is_terminal {
        writeln!(writer, "{color}{tag}: {msg}{RESET}")
    } else {
        writeln!(writer, "{tag}: {msg}")
    };
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
