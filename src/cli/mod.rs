//! Command Line Interface (CLI) layer for the `add` binary.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the parse -> compute -> report
//! flow. It wires user-provided operands to the underlying library
//! functionality exposed via `arith::api`.
//!
//! If you are embedding ARITH into another application, prefer using
//! the high-level `arith::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
