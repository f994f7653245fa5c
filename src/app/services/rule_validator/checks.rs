//! The ordered validation check battery
//!
//! Checks run in a fixed order. The structural check gates everything: a
//! sheet with no content fails immediately since every later check
//! presupposes loaded data. After that, every check runs unconditionally
//! and independently so a caller sees the full set of problems in one pass.
//! A fault inside one check (out-of-range row, malformed entry) becomes an
//! error or warning for that check alone and never aborts the rest.

use super::report::ValidationReport;
use crate::app::models::{CellGrid, CellValue};
use crate::config::SheetSchema;
use crate::constants::{
    ACCOUNT_TYPE_LABEL, AUDIT_KEYWORD, COMPANY_NAME_LABEL, FIRST_DATA_COLUMN, MAX_CALENDAR_YEAR,
    MIN_CALENDAR_YEAR, YEAR_HEADER_KEYWORD,
};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Validate a loaded grid against the schema.
///
/// Pure function: the grid and schema are only read, and every finding is
/// returned in the report.
pub fn validate(grid: &CellGrid, schema: &SheetSchema) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !check_sheet_not_empty(grid, &mut report) {
        return report;
    }

    check_company_name(grid, schema, &mut report);

    if schema.validate_account_type {
        check_audited_values(grid, schema, &mut report);
    } else {
        info!("Account-type validation skipped as per schema");
    }

    check_years_row(grid, schema, &mut report);
    check_row_labels(grid, schema, &mut report);
    check_row_values(grid, schema, &mut report);
    check_year_continuity(grid, schema, &mut report);

    debug!("Validation finished: {}", report.summary());
    report
}

/// Check 1: the sheet holds at least one non-blank cell.
///
/// Returns false when the remaining checks should not run.
pub fn check_sheet_not_empty(grid: &CellGrid, report: &mut ValidationReport) -> bool {
    if grid.row_count() == 0 {
        report.add_error("Sheet is empty");
        return false;
    }
    if grid.is_blank() {
        report.add_error("Sheet contains no data (all cells are blank)");
        return false;
    }
    true
}

/// Check 2: the company name next to the company label matches the schema
pub fn check_company_name(grid: &CellGrid, schema: &SheetSchema, report: &mut ValidationReport) {
    let Some(expected) = schema.expected_company_name.as_deref() else {
        report.add_warning("No expected company name specified in schema");
        return;
    };

    let Some(row) = grid.find_row_by_label(COMPANY_NAME_LABEL) else {
        report.add_error(format!("Could not find '{}' row", COMPANY_NAME_LABEL));
        return;
    };

    let cell = grid.cell(row, FIRST_DATA_COLUMN);
    if cell.is_blank() {
        report.add_error("Company name cell is empty");
        return;
    }

    let actual = cell.as_text();
    if actual.trim() != expected.trim() {
        report.add_error(format!(
            "Company name mismatch. Expected: '{}', Found: '{}'",
            expected,
            actual.trim()
        ));
    }
}

/// Check 3: the configured account-type row carries at least one audited value
pub fn check_audited_values(grid: &CellGrid, schema: &SheetSchema, report: &mut ValidationReport) {
    let Some(row_number) = schema.account_type_row else {
        report.add_warning("No account type row specified in schema");
        return;
    };
    if row_number == 0 {
        report.add_error("Account type row 0 is not a valid row; row numbers are 1-based");
        return;
    }

    let row_index = row_number as usize - 1;
    let Some(cells) = grid.row(row_index) else {
        report.add_error(format!(
            "Account type row {} is out of range (sheet has {} rows)",
            row_number,
            grid.row_count()
        ));
        return;
    };

    let first = cells.first().map(|c| c.as_text()).unwrap_or_default();
    if !first.contains(ACCOUNT_TYPE_LABEL) {
        report.add_error(format!(
            "Row {} does not contain account type information",
            row_number
        ));
        return;
    }

    let has_audited = cells.iter().skip(FIRST_DATA_COLUMN).any(|cell| {
        matches!(cell, CellValue::Text(s) if s.to_lowercase().contains(AUDIT_KEYWORD))
    });
    if !has_audited {
        report.add_error("No 'Audited' value found in account type row");
    }
}

/// Check 4: the years row holds at least one valid calendar year
pub fn check_years_row(grid: &CellGrid, schema: &SheetSchema, report: &mut ValidationReport) {
    let Some(row_number) = schema.years_row else {
        report.add_warning("No years row specified in schema");
        return;
    };
    if row_number == 0 {
        report.add_error("Years row 0 is not a valid row; row numbers are 1-based");
        return;
    }

    let row_index = row_number as usize - 1;
    let Some(cells) = grid.row(row_index) else {
        report.add_error(format!(
            "Years row {} is out of range (sheet has {} rows)",
            row_number,
            grid.row_count()
        ));
        return;
    };

    if let Some(first) = cells.first() {
        if !first.is_blank()
            && !first.as_text().to_lowercase().contains(YEAR_HEADER_KEYWORD)
        {
            report.add_warning(format!(
                "Years row first cell is not empty and does not mention 'year': '{}'",
                first.as_text()
            ));
        }
    }

    let mut valid_years = Vec::new();
    for cell in cells.iter().skip(FIRST_DATA_COLUMN) {
        if cell.is_blank() {
            continue;
        }
        match cell.as_integer() {
            None => {
                report.add_warning(format!(
                    "Non-numeric year value in years row: '{}'",
                    cell.as_text()
                ));
            }
            Some(year) => {
                let year = year as i32;
                if (MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&year) {
                    valid_years.push(year);
                } else {
                    report.add_warning(format!("Unusual year value in years row: {}", year));
                }
            }
        }
    }

    if valid_years.is_empty() {
        report.add_error("No valid years found in the years row");
    } else {
        debug!("Found valid years: {:?}", valid_years);
    }
}

/// Check 5: every asserted row carries its expected label
pub fn check_row_labels(grid: &CellGrid, schema: &SheetSchema, report: &mut ValidationReport) {
    for assertion in &schema.row_assertions {
        if assertion.row == 0 {
            report.add_error(format!(
                "Row assertion '{}' uses row 0; row numbers are 1-based",
                assertion.expected_label
            ));
            continue;
        }

        let row_index = assertion.row as usize - 1;
        let Some(cells) = grid.row(row_index) else {
            report.add_error(format!(
                "Row {} is out of range (sheet has {} rows)",
                assertion.row,
                grid.row_count()
            ));
            continue;
        };

        let actual = cells.first().map(|c| c.as_text()).unwrap_or_default();
        if actual != assertion.expected_label {
            report.add_error(format!(
                "Row label mismatch at row {}. Expected: '{}', Found: '{}'",
                assertion.row, assertion.expected_label, actual
            ));
        }
    }
}

/// Check 6: every asserted row carries at least one value
pub fn check_row_values(grid: &CellGrid, schema: &SheetSchema, report: &mut ValidationReport) {
    for assertion in &schema.row_assertions {
        if assertion.row == 0 {
            continue; // already reported by the label check
        }

        let row_index = assertion.row as usize - 1;
        let Some(cells) = grid.row(row_index) else {
            report.add_error(format!(
                "Row {} has no values (row is out of range)",
                assertion.row
            ));
            continue;
        };

        let has_value = cells
            .iter()
            .skip(FIRST_DATA_COLUMN)
            .any(|cell| !cell.is_blank());
        if !has_value {
            let label = cells.first().map(|c| c.as_text()).unwrap_or_default();
            report.add_error(format!(
                "Row {} ('{}') has no values across any year",
                assertion.row, label
            ));
        }
    }
}

/// Check 7: the year sequence is continuous and long enough.
///
/// Gaps are non-fatal; falling short of the configured minimum is an error.
pub fn check_year_continuity(grid: &CellGrid, schema: &SheetSchema, report: &mut ValidationReport) {
    let Some(row_number) = schema.years_row else {
        return; // absence already warned about by the years row check
    };
    if row_number == 0 {
        return; // already reported by the years row check
    }

    let row_index = row_number as usize - 1;
    let Some(cells) = grid.row(row_index) else {
        return; // out-of-range already reported by the years row check
    };

    let years: BTreeSet<i32> = cells
        .iter()
        .skip(FIRST_DATA_COLUMN)
        .filter_map(|cell| cell.as_integer())
        .map(|year| year as i32)
        .filter(|year| (MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(year))
        .collect();

    let sorted: Vec<i32> = years.into_iter().collect();
    for pair in sorted.windows(2) {
        if pair[1] - pair[0] > 1 {
            report.add_warning(format!("Gap in year sequence: {} to {}", pair[0], pair[1]));
        }
    }

    let min_years = schema.settings.min_required_years as usize;
    if min_years > 0 && sorted.len() < min_years {
        report.add_error(format!(
            "Insufficient number of years. Found {}, required {}",
            sorted.len(),
            min_years
        ));
    }
}
