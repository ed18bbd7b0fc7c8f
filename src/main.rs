//! Breakdown: resolve two-token prompt commands.
//!
//! This is the main entry point for the `breakdown` CLI. It parses arguments,
//! runs the command, and handles errors with proper exit codes.

use breakdown::cli::Cli;
use breakdown::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
