//! Pipeline orchestration: load, validate, extract, persist
//!
//! The processor sequences one full pass over a sheet: load the grid,
//! run the validation battery, and only for valid sheets derive metadata
//! and extract records. Persistence is handed to a [`RecordSink`]
//! collaborator; a sink failure is the run's failure with no partial state.

use crate::app::models::{CellGrid, FinancialRecord};
use crate::app::services::rule_validator::{self, ValidationReport};
use crate::app::services::{attribute_extractor, metadata_extractor, sheet_loader};
use crate::config::SheetSchema;
use crate::{Error, Result};
use std::future::Future;
use std::path::Path;
use tracing::{info, warn};

/// Result of one validate-then-extract pass
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The sheet failed validation (or could not be loaded)
    Rejected(ValidationReport),

    /// The sheet passed validation and these records were extracted.
    ///
    /// The record list can be empty: a valid sheet with no extractable data
    /// points is a soft failure that callers surface distinctly from
    /// success instead of silently accepting.
    Accepted(Vec<FinancialRecord>),
}

impl Outcome {
    /// Check whether the sheet passed validation
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// Destination for extracted records.
///
/// Implementations perform one atomic batch write: either every record is
/// persisted and the count returned, or the whole batch fails.
pub trait RecordSink {
    /// Persist all records, returning the number written
    fn persist(
        &self,
        records: &[FinancialRecord],
    ) -> impl Future<Output = Result<u64>> + Send;
}

/// Orchestrates the full validate-then-extract pass for one sheet.
///
/// The processor owns only the immutable schema and can be shared across
/// requests; every pass works on request-local state.
#[derive(Debug, Clone)]
pub struct SheetProcessor {
    schema: SheetSchema,
}

impl SheetProcessor {
    /// Create a processor for the given schema
    pub fn new(schema: SheetSchema) -> Self {
        Self { schema }
    }

    /// The schema this processor validates against
    pub fn schema(&self) -> &SheetSchema {
        &self.schema
    }

    /// Run the full pass over a workbook on disk.
    ///
    /// A workbook that cannot be loaded is rejected with a single
    /// structural error rather than surfacing as a hard failure, so callers
    /// handle it the same way as any other invalid submission.
    pub fn run(&self, path: &Path, customer_id: i64, application_id: i64) -> Outcome {
        let grid = match sheet_loader::load_grid(path, &self.schema.sheet_name) {
            Ok(grid) => grid,
            Err(e) => {
                let mut report = ValidationReport::new();
                report.add_error(format!("Error loading sheet: {}", e));
                return Outcome::Rejected(report);
            }
        };

        self.run_with_grid(&grid, customer_id, application_id)
    }

    /// Run the full pass over an already-loaded grid
    pub fn run_with_grid(
        &self,
        grid: &CellGrid,
        customer_id: i64,
        application_id: i64,
    ) -> Outcome {
        let report = rule_validator::validate(grid, &self.schema);
        if !report.is_valid {
            info!("Sheet rejected: {}", report.summary());
            return Outcome::Rejected(report);
        }

        let metadata = metadata_extractor::extract_metadata(grid, &self.schema);
        let result = attribute_extractor::extract_records(
            grid,
            &self.schema,
            &metadata,
            customer_id,
            application_id,
        );

        if result.records.is_empty() {
            warn!("Sheet passed validation but no data points were extracted");
        } else {
            info!(
                "Extracted {} record(s) across {} year(s)",
                result.records.len(),
                metadata.year_count()
            );
        }

        Outcome::Accepted(result.records)
    }

    /// Run the full pass and hand accepted records to the sink.
    ///
    /// This is the persistence boundary: a rejected sheet passes through
    /// unchanged, an empty extraction surfaces as an error, and a sink
    /// failure is the run's failure.
    pub async fn run_and_persist<S: RecordSink>(
        &self,
        path: &Path,
        customer_id: i64,
        application_id: i64,
        sink: &S,
    ) -> Result<PersistedOutcome> {
        match self.run(path, customer_id, application_id) {
            Outcome::Rejected(report) => Ok(PersistedOutcome::Rejected(report)),
            Outcome::Accepted(records) => {
                if records.is_empty() {
                    return Err(Error::EmptyExtraction);
                }
                let inserted = sink.persist(&records).await?;
                Ok(PersistedOutcome::Persisted { inserted })
            }
        }
    }
}

/// Result of a pass that includes persistence
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedOutcome {
    /// The sheet failed validation; nothing was written
    Rejected(ValidationReport),

    /// All extracted records were written in one batch
    Persisted { inserted: u64 },
}
