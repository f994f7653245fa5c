//! Attribute record extraction for validated sheets
//!
//! This module walks the schema's attribute rows across the recognized year
//! columns and produces the normalized records handed to the persistence
//! layer.
//!
//! ## Architecture
//!
//! - [`extractor`] - Core extraction walk over attributes and years
//! - [`stats`] - Extraction statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use finsheet_processor::app::services::{attribute_extractor, metadata_extractor};
//! use finsheet_processor::app::models::{CellGrid, CellValue};
//! use finsheet_processor::config::SheetSchema;
//!
//! let grid = CellGrid::new(vec![vec![CellValue::Blank, CellValue::Number(2021.0)]]);
//! let schema = SheetSchema {
//!     years_row: Some(1),
//!     ..Default::default()
//! };
//!
//! let metadata = metadata_extractor::extract_metadata(&grid, &schema);
//! let result = attribute_extractor::extract_records(&grid, &schema, &metadata, 3, 7);
//! println!("Extracted {} record(s)", result.records.len());
//! ```

pub mod extractor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::extract_records;
pub use stats::{ExtractionResult, ExtractionStats};
