//! Application constants for the financial sheet processor
//!
//! This module contains the sheet layout literals, value bounds, and
//! default settings used throughout the processor.

// =============================================================================
// Sheet Layout Labels
// =============================================================================

/// Label of the row carrying the company name in its adjacent cell
pub const COMPANY_NAME_LABEL: &str = "Name of the Company";

/// Fragment the account-type row's first cell must contain
pub const ACCOUNT_TYPE_LABEL: &str = "Type of accounts";

/// Full first-cell label used when scanning for the account-type row
/// (fallback when no row index is configured)
pub const ACCOUNT_TYPE_SCAN_LABEL: &str = "Type of accounts (Audited or Management)";

/// Keyword identifying audited account-type cells (matched case-insensitively)
pub const AUDIT_KEYWORD: &str = "audit";

/// Keyword expected in the years row header cell (matched case-insensitively)
pub const YEAR_HEADER_KEYWORD: &str = "year";

// =============================================================================
// Value Bounds
// =============================================================================

/// Earliest calendar year accepted in the years row
pub const MIN_CALENDAR_YEAR: i32 = 1900;

/// Latest calendar year accepted in the years row
pub const MAX_CALENDAR_YEAR: i32 = 2100;

/// Maximum number of year columns considered during metadata extraction.
/// Columns beyond this window are ignored, bounding the supported history depth.
pub const MAX_YEAR_COLUMNS: usize = 10;

/// First 0-based column holding yearly data (column A holds row labels)
pub const FIRST_DATA_COLUMN: usize = 1;

// =============================================================================
// Defaults
// =============================================================================

/// Worksheet processed when the schema does not name one
pub const DEFAULT_SHEET_NAME: &str = "Compute";

/// Database table records are inserted into when the config does not name one
pub const DEFAULT_RECORDS_TABLE: &str = "financial_attributes";

/// Workbook file extensions the loader accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xls", "xlsx"];

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Maximum accepted upload size for the HTTP endpoint, in bytes
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
