//! Schema-driven validation of financial sheets
//!
//! This module runs an ordered battery of independent checks against a
//! loaded cell grid and collects every finding into a single report.
//!
//! ## Architecture
//!
//! - [`checks`] - The ordered check battery and the `validate` entry point
//! - [`report`] - Error/warning accumulation and the validity invariant
//!
//! ## Usage
//!
//! ```rust
//! use finsheet_processor::app::services::rule_validator;
//! use finsheet_processor::app::models::{CellGrid, CellValue};
//! use finsheet_processor::config::SheetSchema;
//!
//! let grid = CellGrid::new(vec![vec![CellValue::Text("x".to_string())]]);
//! let schema = SheetSchema::default();
//!
//! let report = rule_validator::validate(&grid, &schema);
//! println!("{}", report.summary());
//! ```

pub mod checks;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use checks::validate;
pub use report::ValidationReport;
