//! Company and year metadata extraction
//!
//! Derives the company name and the year-column mapping a validated sheet
//! carries. This step assumes the validator already gate-kept structural
//! validity: unparseable cells are logged and skipped, never raised.

use crate::app::models::{AccountType, CellGrid, SheetMetadata, YearInfo};
use crate::config::SheetSchema;
use crate::constants::{COMPANY_NAME_LABEL, FIRST_DATA_COLUMN, MAX_YEAR_COLUMNS};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Extract company and year metadata from a validated grid
pub fn extract_metadata(grid: &CellGrid, schema: &SheetSchema) -> SheetMetadata {
    let company_name = extract_company_name(grid);
    let years = extract_years(grid, schema);

    debug!(
        "Extracted metadata: company={:?}, {} year column(s)",
        company_name,
        years.len()
    );

    SheetMetadata {
        company_name,
        years,
    }
}

/// Read the company name next to the company label row, if both exist
fn extract_company_name(grid: &CellGrid) -> Option<String> {
    let row = grid.find_row_by_label(COMPANY_NAME_LABEL)?;
    let cell = grid.cell(row, FIRST_DATA_COLUMN);
    if cell.is_blank() {
        return None;
    }
    Some(cell.as_text().trim().to_string())
}

/// Build the year-column mapping from the years row.
///
/// Only the first [`MAX_YEAR_COLUMNS`] data columns are considered; later
/// columns are ignored. Ordinals track sheet column position, so a blank
/// column leaves a hole in the ordinal sequence rather than shifting it.
fn extract_years(grid: &CellGrid, schema: &SheetSchema) -> BTreeMap<usize, YearInfo> {
    let mut years = BTreeMap::new();

    let Some(row_number) = schema.years_row else {
        warn!("No years row configured; no year columns extracted");
        return years;
    };
    if row_number == 0 {
        warn!("Years row 0 is not a valid row; no year columns extracted");
        return years;
    }
    let Some(cells) = grid.row(row_number as usize - 1) else {
        warn!("Years row {} is out of range; no year columns extracted", row_number);
        return years;
    };

    let account_type_row = schema.account_type_lookup().resolve(grid);
    if account_type_row.is_none() {
        debug!("No account type row found; year columns classified as unknown");
    }

    let upper = cells.len().min(FIRST_DATA_COLUMN + MAX_YEAR_COLUMNS);
    for (column, cell) in cells.iter().enumerate().take(upper).skip(FIRST_DATA_COLUMN) {
        if cell.is_blank() {
            continue;
        }

        let Some(year) = cell.as_integer() else {
            warn!("Couldn't parse year from '{}' at column {}", cell, column);
            continue;
        };

        let account_type = match account_type_row {
            Some(row) => AccountType::classify(grid.cell(row, column)),
            None => AccountType::Unknown,
        };

        match YearInfo::new(column, year as i32, account_type) {
            Some(info) => {
                years.insert(column, info);
            }
            None => {
                warn!("Year {} at column {} is out of range; column skipped", year, column);
            }
        }
    }

    years
}
