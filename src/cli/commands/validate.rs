//! Validate command implementation
//!
//! Runs the validation battery against one spreadsheet and reports every
//! finding, without extracting or persisting anything. Exits non-zero when
//! the sheet is invalid so the command can gate automation.

use super::shared::{print_validation_report, setup_logging, write_report_file};
use crate::app::services::{rule_validator, sheet_loader};
use crate::cli::args::ValidateArgs;
use crate::config::SheetSchema;
use crate::{Error, Result};
use tracing::{debug, info};

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Validating {}", args.sheet.display());
    debug!("Validation arguments: {:?}", args);

    args.validate()?;

    let schema = SheetSchema::load(&args.schema)?;

    let report = match sheet_loader::load_grid(&args.sheet, &schema.sheet_name) {
        Ok(grid) => rule_validator::validate(&grid, &schema),
        Err(e) => {
            // An unloadable workbook is reported like any other finding
            let mut report = rule_validator::ValidationReport::new();
            report.add_error(format!("Error loading sheet: {}", e));
            report
        }
    };

    print_validation_report(&report, args.format)?;

    if let Some(output) = &args.output {
        write_report_file(&report, output)?;
    }

    if report.is_valid {
        Ok(())
    } else {
        Err(Error::validation_failed(report.error_count()))
    }
}
