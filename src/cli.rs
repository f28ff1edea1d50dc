//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::checks;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Objlens - run the direct-vs-reflective object semantics check suite
#[derive(Parser)]
#[command(name = "olens")]
#[command(about = "Objlens - run the direct-vs-reflective object semantics check suite")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every check in order, stopping at the first failure
    Run {
        /// Emit results as JSON instead of one line per check
        #[arg(long)]
        json: bool,
    },
    /// List check names without running them
    List,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { json } => run_checks(json),
        Commands::List => run_list(),
    }
}

/// Execute the check suite, fail-fast, and report.
fn run_checks(json: bool) -> ExitCode {
    match checks::run_all() {
        Ok(outcomes) => {
            if json {
                match serde_json::to_string_pretty(&outcomes) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(e) => {
                        eprintln!("Error: cannot serialize results: {e}");
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            } else {
                for outcome in &outcomes {
                    println!("ok - {}", outcome.name);
                }
                println!("{} checks passed", outcomes.len());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(failure) => {
            eprintln!("Error: {failure}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the suite's check names in execution order.
fn run_list() -> ExitCode {
    for check in checks::all_checks() {
        println!("{}", check.name);
    }
    ExitCode::from(EXIT_SUCCESS)
}
