//! Process command implementation
//!
//! Runs the full pipeline for one spreadsheet: validate, extract, and
//! persist the records to the configured database. With --dry-run the
//! extracted records are printed instead of written.

use super::shared::{print_validation_report, setup_logging};
use crate::app::adapters::postgres::PostgresSink;
use crate::app::models::FinancialRecord;
use crate::app::services::sheet_processor::{Outcome, PersistedOutcome, SheetProcessor};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::{SheetSchema, StorageConfig};
use crate::{Error, Result};
use colored::Colorize;
use tracing::info;

/// Process command runner
pub async fn run_process(args: ProcessArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!(
        "Processing {} for customer {} application {}",
        args.sheet.display(),
        args.customer_id,
        args.application_id
    );

    args.validate()?;

    let schema = SheetSchema::load(&args.schema)?;
    let processor = SheetProcessor::new(schema);

    if args.dry_run {
        return run_dry(&processor, &args);
    }

    let config_path = args
        .config
        .as_ref()
        .expect("checked by argument validation");
    let storage = StorageConfig::load(config_path)?;
    let sink = PostgresSink::connect(&storage.database).await?;

    let outcome = processor
        .run_and_persist(&args.sheet, args.customer_id, args.application_id, &sink)
        .await?;

    match outcome {
        PersistedOutcome::Rejected(report) => {
            print_validation_report(&report, args.format)?;
            Err(Error::validation_failed(report.error_count()))
        }
        PersistedOutcome::Persisted { inserted } => {
            if !args.quiet {
                println!(
                    "{} {} record(s) inserted",
                    "OK:".green().bold(),
                    inserted
                );
            }
            Ok(())
        }
    }
}

/// Extract and print records without touching the database
fn run_dry(processor: &SheetProcessor, args: &ProcessArgs) -> Result<()> {
    match processor.run(&args.sheet, args.customer_id, args.application_id) {
        Outcome::Rejected(report) => {
            print_validation_report(&report, args.format)?;
            Err(Error::validation_failed(report.error_count()))
        }
        Outcome::Accepted(records) if records.is_empty() => Err(Error::EmptyExtraction),
        Outcome::Accepted(records) => {
            print_records(&records, args.format)?;
            Ok(())
        }
    }
}

/// Print extracted records in the requested format
fn print_records(records: &[FinancialRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(records)
                .map_err(|e| Error::configuration(format!("Failed to serialize records: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("\nExtracted {} record(s):", records.len());
            for record in records {
                println!(
                    "  {} {} = {} ({}, ordinal {})",
                    record.calendar_year,
                    record.attribute_name,
                    record.value,
                    record.account_type,
                    record.year_ordinal
                );
            }
        }
    }
    Ok(())
}
