//! Data models for financial sheet processing
//!
//! This module contains the core data structures for representing spreadsheet
//! cell values, the loaded cell grid, derived year metadata, and the
//! normalized records handed to the persistence layer.

use crate::constants::{AUDIT_KEYWORD, MAX_CALENDAR_YEAR, MIN_CALENDAR_YEAR};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Cell Values
// =============================================================================

/// A single spreadsheet cell value.
///
/// Sheets mix numbers, text, dates, and blanks freely within a column, so
/// every read site goes through the total coercion methods below instead of
/// assuming a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Absent or empty cell
    Blank,
    /// Numeric cell (integers and floats are not distinguished by the format)
    Number(f64),
    /// Text cell
    Text(String),
    /// Date or datetime cell
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check whether the cell holds no usable content.
    ///
    /// Whitespace-only text counts as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Blank => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Coerce the cell to an integer.
    ///
    /// Numbers truncate; text parses as an integer string. Dates and blanks
    /// never coerce.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n as i64),
            CellValue::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Coerce the cell to a floating-point number.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// String-cast the cell for label comparisons and messages.
    ///
    /// Whole numbers render without a fractional part so a numeric `5` matches
    /// the label "5".
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Blank => String::new(),
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                format!("{}", *n as i64)
            }
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::DateTime(dt) => dt.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

// =============================================================================
// Cell Grid
// =============================================================================

/// Shared blank returned for out-of-range reads
static BLANK: CellValue = CellValue::Blank;

/// Read-only, row-major view of one worksheet's cell values.
///
/// The grid is materialized once per request by the sheet loader and never
/// mutated afterwards. Out-of-range reads are answered with a blank cell so
/// callers can treat ragged rows and missing trailing columns uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    rows: Vec<Vec<CellValue>>,
}

impl CellGrid {
    /// Create a grid from row-major cell values
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by 0-based index
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Get a cell by 0-based row and column index.
    ///
    /// Reads outside the grid resolve to a blank cell.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&BLANK)
    }

    /// Check whether every cell in the grid is blank
    pub fn is_blank(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_blank()))
    }

    /// Find the first row whose first cell is exactly the given text label
    pub fn find_row_by_label(&self, label: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row.first(), Some(CellValue::Text(s)) if s == label))
    }
}

/// Strategy for locating a row in the grid.
///
/// Rows are normally addressed by their configured 1-based number; the
/// account-type row additionally supports a label scan when no number is
/// configured.
#[derive(Debug, Clone, PartialEq)]
pub enum RowLookup<'a> {
    /// 1-based row number from the schema
    Index(usize),
    /// Scan for the first row whose first cell equals the label
    LabelScan(&'a str),
}

impl RowLookup<'_> {
    /// Resolve the lookup to a 0-based row index, if the row exists
    pub fn resolve(&self, grid: &CellGrid) -> Option<usize> {
        match self {
            RowLookup::Index(n) if *n >= 1 => {
                let index = n - 1;
                (index < grid.row_count()).then_some(index)
            }
            RowLookup::Index(_) => None,
            RowLookup::LabelScan(label) => grid.find_row_by_label(label),
        }
    }
}

// =============================================================================
// Year Metadata
// =============================================================================

/// Classification of a year column's accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Figures audited by an external party
    Audited,
    /// Management accounts
    Managed,
    /// No account-type information available for the column
    Unknown,
}

impl AccountType {
    /// Classify an account-type cell.
    ///
    /// Any cell containing "audit" (case-insensitive) is audited; any other
    /// non-blank cell is managed; a blank or missing cell is unknown.
    pub fn classify(cell: &CellValue) -> Self {
        if cell.is_blank() {
            return AccountType::Unknown;
        }
        if cell.as_text().to_lowercase().contains(AUDIT_KEYWORD) {
            AccountType::Audited
        } else {
            AccountType::Managed
        }
    }

    /// Value stored in the database; unknown persists as NULL
    pub fn as_db_value(&self) -> Option<&'static str> {
        match self {
            AccountType::Audited => Some("audited"),
            AccountType::Managed => Some("managed"),
            AccountType::Unknown => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountType::Audited => "audited",
            AccountType::Managed => "managed",
            AccountType::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Metadata for one recognized year column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearInfo {
    /// 0-based sheet column the year was read from
    pub column: usize,

    /// Calendar year, always within [1900, 2100]
    pub calendar_year: i32,

    /// Account-type classification for the column
    pub account_type: AccountType,

    /// Ordinal reflecting the column's position in the sheet.
    ///
    /// Equal to the 0-based column index, so ordinals stay stable even when
    /// earlier year columns were blank and skipped.
    pub year_ordinal: i32,
}

impl YearInfo {
    /// Build a `YearInfo`, rejecting calendar years outside the accepted range
    pub fn new(column: usize, calendar_year: i32, account_type: AccountType) -> Option<Self> {
        if !(MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&calendar_year) {
            return None;
        }
        Some(Self {
            column,
            calendar_year,
            account_type,
            year_ordinal: column as i32,
        })
    }
}

/// Company and year metadata derived from a validated sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetMetadata {
    /// Company name read next to the company label row, if present
    pub company_name: Option<String>,

    /// Recognized year columns, keyed by 0-based column index.
    ///
    /// Iteration order is column order.
    pub years: BTreeMap<usize, YearInfo>,
}

impl SheetMetadata {
    /// Number of recognized year columns
    pub fn year_count(&self) -> usize {
        self.years.len()
    }
}

// =============================================================================
// Normalized Records
// =============================================================================

/// One normalized (attribute, year, value) data point.
///
/// Immutable once constructed; this is the unit handed to the persistence
/// sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Account-type classification inherited from the year column
    pub account_type: AccountType,

    /// Caller-supplied application identifier
    pub application_id: i64,

    /// Attribute identifier from the schema
    pub attribute_id: i64,

    /// Attribute display name from the schema
    pub attribute_name: String,

    /// Numeric cell value
    pub value: f64,

    /// Caller-supplied customer identifier
    pub customer_id: i64,

    /// Calendar year the value belongs to
    pub calendar_year: i32,

    /// Ordinal of the year column within the sheet
    pub year_ordinal: i32,
}
