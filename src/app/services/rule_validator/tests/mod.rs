//! Tests for the rule validator
//!
//! This module provides unit tests for the check battery and the report
//! invariants, plus shared grid and schema fixtures.

pub mod checks_tests;

// Test helper functions and fixtures
use crate::app::models::{CellGrid, CellValue};
use crate::config::{AttributeDescriptor, RowAssertion, SheetSchema, ValidationSettings};

/// Shorthand for a text cell
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

/// Shorthand for a numeric cell
pub fn num(v: f64) -> CellValue {
    CellValue::Number(v)
}

/// Shorthand for a blank cell
pub fn blank() -> CellValue {
    CellValue::Blank
}

/// Build a grid from row-major cells
pub fn grid(rows: Vec<Vec<CellValue>>) -> CellGrid {
    CellGrid::new(rows)
}

/// A well-formed four-row sheet matching [`base_schema`]:
/// company row, years row, account-type row, one attribute row.
pub fn base_grid() -> CellGrid {
    grid(vec![
        vec![text("Name of the Company"), text("Acme Corp")],
        vec![blank(), num(2021.0), num(2022.0)],
        vec![
            text("Type of accounts (Audited or Management)"),
            text("Audited"),
            text("Management Accounts"),
        ],
        vec![text("Revenue"), num(150.5), num(200.0)],
    ])
}

/// Schema matching [`base_grid`]
pub fn base_schema() -> SheetSchema {
    SheetSchema {
        sheet_name: "Compute".to_string(),
        expected_company_name: Some("Acme Corp".to_string()),
        years_row: Some(2),
        account_type_row: Some(3),
        row_assertions: vec![RowAssertion {
            row: 4,
            expected_label: "Revenue".to_string(),
        }],
        attributes: vec![AttributeDescriptor {
            id: 101,
            row: 4,
            name: "Revenue".to_string(),
        }],
        validate_account_type: true,
        settings: ValidationSettings::default(),
    }
}
