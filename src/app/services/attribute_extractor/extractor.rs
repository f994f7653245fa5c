//! Record extraction over the year-column mapping
//!
//! Reads each configured attribute row and emits one normalized record per
//! (attribute, year) cell holding a usable numeric value. Missing rows and
//! unusable cells degrade the output instead of aborting extraction.

use super::stats::{ExtractionResult, ExtractionStats};
use crate::app::models::{CellGrid, FinancialRecord, SheetMetadata};
use crate::config::SheetSchema;
use tracing::{debug, warn};

/// Extract normalized records for every attribute and recognized year.
///
/// Attributes are processed in schema order; within an attribute, years are
/// processed in column order. A blank cell is an absent data point, not an
/// error. Cells that fail numeric coercion are recorded in the stats and
/// skipped.
pub fn extract_records(
    grid: &CellGrid,
    schema: &SheetSchema,
    metadata: &SheetMetadata,
    customer_id: i64,
    application_id: i64,
) -> ExtractionResult {
    let mut records = Vec::new();
    let mut stats = ExtractionStats::new();

    for attribute in &schema.attributes {
        if attribute.row == 0 {
            let message = format!(
                "Attribute '{}' uses row 0; row numbers are 1-based",
                attribute.name
            );
            warn!("{}", message);
            stats.skipped.push(message);
            continue;
        }

        let row_index = attribute.row as usize - 1;
        if grid.row(row_index).is_none() {
            let message = format!(
                "Attribute '{}' row {} is out of range (sheet has {} rows)",
                attribute.name,
                attribute.row,
                grid.row_count()
            );
            warn!("{}", message);
            stats.skipped.push(message);
            continue;
        }

        for (column, year_info) in &metadata.years {
            stats.cells_considered += 1;

            let cell = grid.cell(row_index, *column);
            if cell.is_blank() {
                stats.blank_cells += 1;
                continue;
            }

            let Some(value) = cell.as_float() else {
                let message = format!(
                    "Attribute '{}' year {}: non-numeric value '{}'",
                    attribute.name,
                    year_info.calendar_year,
                    cell.as_text()
                );
                warn!("{}", message);
                stats.skipped.push(message);
                continue;
            };

            records.push(FinancialRecord {
                account_type: year_info.account_type,
                application_id,
                attribute_id: attribute.id,
                attribute_name: attribute.name.clone(),
                value,
                customer_id,
                calendar_year: year_info.calendar_year,
                year_ordinal: year_info.year_ordinal,
            });
        }
    }

    stats.records_extracted = records.len();
    debug!(
        "Extracted {} record(s) from {} cell(s) ({} blank, {} skipped)",
        stats.records_extracted,
        stats.cells_considered,
        stats.blank_cells,
        stats.skipped.len()
    );

    ExtractionResult { records, stats }
}
