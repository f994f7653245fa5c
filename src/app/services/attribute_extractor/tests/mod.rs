//! Tests for attribute record extraction
//!
//! This module provides unit tests for the extraction walk and its
//! statistics, plus shared fixtures.


// Test helper functions and fixtures
use crate::app::models::{CellGrid, CellValue};
use crate::app::services::metadata_extractor;
use crate::config::{AttributeDescriptor, SheetSchema};

/// Shorthand for a text cell
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

/// Shorthand for a numeric cell
pub fn num(v: f64) -> CellValue {
    CellValue::Number(v)
}

/// A three-row sheet: years row, account-type row, one attribute row
pub fn base_grid() -> CellGrid {
    CellGrid::new(vec![
        vec![CellValue::Blank, num(2021.0), num(2022.0)],
        vec![
            text("Type of accounts (Audited or Management)"),
            text("Audited"),
            text("Management Accounts"),
        ],
        vec![text("Revenue"), num(150.5), num(200.0)],
    ])
}

/// Schema matching [`base_grid`] with one extractable attribute
pub fn base_schema() -> SheetSchema {
    SheetSchema {
        years_row: Some(1),
        account_type_row: Some(2),
        attributes: vec![AttributeDescriptor {
            id: 101,
            row: 3,
            name: "Revenue".to_string(),
        }],
        ..Default::default()
    }
}

/// Extract metadata for a grid under [`base_schema`]-style configuration
pub fn metadata_for(
    grid: &CellGrid,
    schema: &SheetSchema,
) -> crate::app::models::SheetMetadata {
    metadata_extractor::extract_metadata(grid, schema)
}
