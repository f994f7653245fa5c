//! Command-line argument definitions for the financial sheet processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API, with per-command argument validation.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the financial sheet processor
///
/// Validates financial spreadsheet submissions against a declarative
/// schema and extracts time-series attributes into normalized records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "finsheet-processor",
    version,
    about = "Validate financial spreadsheets and extract attribute records",
    long_about = "Validates semi-structured financial spreadsheets (xls/xlsx) against a \
                  declarative YAML schema and, for valid sheets, extracts time-series \
                  financial attributes into normalized records for database storage. \
                  The same pipeline is available as a CLI pass or as an HTTP upload \
                  endpoint."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the financial sheet processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate a spreadsheet against a schema and report findings
    Validate(ValidateArgs),
    /// Validate, extract and persist records from a spreadsheet
    Process(ProcessArgs),
    /// Serve the processing pipeline over HTTP
    Serve(ServeArgs),
}

/// Arguments for the validate command (validation only, no extraction)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Path to the spreadsheet to validate (.xls or .xlsx)
    #[arg(
        short = 's',
        long = "sheet",
        value_name = "FILE",
        help = "Path to the spreadsheet to validate"
    )]
    pub sheet: PathBuf,

    /// Path to the validation schema document
    #[arg(
        long = "schema",
        value_name = "FILE",
        help = "Path to the validation schema (YAML format)"
    )]
    pub schema: PathBuf,

    /// Optional file the validation report is written to as JSON
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the validation report to a file as JSON"
    )]
    pub output: Option<PathBuf>,

    /// Output format for the terminal report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the process command (full pipeline)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the spreadsheet to process (.xls or .xlsx)
    #[arg(
        short = 's',
        long = "sheet",
        value_name = "FILE",
        help = "Path to the spreadsheet to process"
    )]
    pub sheet: PathBuf,

    /// Path to the validation schema document
    #[arg(
        long = "schema",
        value_name = "FILE",
        help = "Path to the validation schema (YAML format)"
    )]
    pub schema: PathBuf,

    /// Path to the storage configuration document
    ///
    /// Required unless --dry-run is set.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to the storage configuration (YAML format)"
    )]
    pub config: Option<PathBuf>,

    /// Customer the records belong to
    #[arg(
        long = "customer-id",
        value_name = "ID",
        help = "Customer identifier attached to every record"
    )]
    pub customer_id: i64,

    /// Application the records belong to
    #[arg(
        long = "application-id",
        value_name = "ID",
        help = "Application identifier attached to every record"
    )]
    pub application_id: i64,

    /// Extract records and print them without writing to the database
    #[arg(long = "dry-run", help = "Extract records without persisting them")]
    pub dry_run: bool,

    /// Output format for extracted records in dry-run mode
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the serve command (HTTP endpoint)
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Path to the validation schema document
    #[arg(
        long = "schema",
        value_name = "FILE",
        help = "Path to the validation schema (YAML format)"
    )]
    pub schema: PathBuf,

    /// Path to the storage configuration document
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to the storage configuration (YAML format)"
    )]
    pub config: PathBuf,

    /// Address the server binds to
    #[arg(
        long = "bind",
        value_name = "ADDR",
        default_value = crate::constants::DEFAULT_BIND_ADDR,
        help = "Address and port to bind the HTTP server to"
    )]
    pub bind: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ValidateArgs {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        check_file_exists(&self.sheet, "Sheet")?;
        check_file_exists(&self.schema, "Schema")?;
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ProcessArgs {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        check_file_exists(&self.sheet, "Sheet")?;
        check_file_exists(&self.schema, "Schema")?;

        match &self.config {
            Some(config) => check_file_exists(config, "Storage config")?,
            None if !self.dry_run => {
                return Err(Error::configuration(
                    "A storage config is required unless --dry-run is set",
                ));
            }
            None => {}
        }

        if self.customer_id <= 0 {
            return Err(Error::configuration("Customer id must be positive"));
        }
        if self.application_id <= 0 {
            return Err(Error::configuration("Application id must be positive"));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ServeArgs {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        check_file_exists(&self.schema, "Schema")?;
        check_file_exists(&self.config, "Storage config")?;

        self.bind
            .parse::<std::net::SocketAddr>()
            .map_err(|_| Error::configuration(format!("Invalid bind address: {}", self.bind)))?;

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

fn check_file_exists(path: &PathBuf, what: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "{} file does not exist: {}",
            what,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "{} path is not a file: {}",
            what,
            path.display()
        )));
    }
    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
