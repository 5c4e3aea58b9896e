//! ARITH CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! parse -> compute -> report pipeline, and exit with appropriate status.
//! For programmatic use, prefer the library API (`arith::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // All diagnostics go to stdout, alongside the report
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
