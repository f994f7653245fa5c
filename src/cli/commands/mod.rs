//! Command implementations for the financial sheet processor CLI
//!
//! This module contains the main command execution logic and shared
//! reporting helpers. Each command is implemented in its own module.

pub mod process;
pub mod serve;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the financial sheet processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `validate`: validation only, with a printed or JSON report
/// - `process`: full validate-extract-persist pipeline
/// - `serve`: the same pipeline behind an HTTP upload endpoint
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Serve(serve_args) => serve::run_serve(serve_args).await,
    }
}
