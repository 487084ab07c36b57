//! # conio CLI
//!
//! Styled output and interactive prompts for shell scripts.
//!
//! Prompts are written to stderr and answers to stdout, so
//! `name=$(conio ask "Name")` works as expected.
//! Run `conio --help` for usage information.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
