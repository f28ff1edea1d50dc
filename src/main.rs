//! Objlens - Command-line tool for running the object semantics check suite

use std::process::ExitCode;

use objlens::cli;

fn main() -> ExitCode {
    cli::run()
}
