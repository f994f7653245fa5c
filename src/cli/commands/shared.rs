//! Shared components for CLI commands
//!
//! This module contains the logging setup and the terminal reporting
//! helpers used across command implementations.

use crate::app::services::rule_validator::ValidationReport;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::Colorize;
use std::path::Path;
use tracing::debug;

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("finsheet_processor={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a validation report in the requested format
pub fn print_validation_report(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => print_human_report(report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).map_err(|e| {
                Error::configuration(format!("Failed to serialize validation report: {}", e))
            })?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Print the human-readable validation summary
fn print_human_report(report: &ValidationReport) {
    println!();
    println!("=== VALIDATION SUMMARY ===");
    if report.is_valid {
        println!("Valid: {}", "YES".green().bold());
    } else {
        println!("Valid: {}", "NO".red().bold());
    }

    if !report.errors.is_empty() {
        println!("\nErrors:");
        for (i, error) in report.errors.iter().enumerate() {
            println!("{}. {}", i + 1, error);
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("{}. {}", i + 1, warning.yellow());
        }
    }
}

/// Write a validation report to a file as JSON
pub fn write_report_file(report: &ValidationReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::configuration(format!("Failed to serialize validation report: {}", e)))?;
    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write report to {}", path.display()), e))?;
    println!("\nReport written to {}", path.display());
    Ok(())
}
