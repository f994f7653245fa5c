//! Workbook loading and cell grid materialization
//!
//! This module turns an xls/xlsx workbook into the read-only [`CellGrid`]
//! the validator and extractors operate on. Loading happens once per
//! request; everything downstream works on the in-memory grid.

use crate::app::models::{CellGrid, CellValue};
use crate::{Error, Result};
use calamine::{Data, Range, Reader, open_workbook_auto, open_workbook_auto_from_rs};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Load one worksheet from a workbook on disk into a cell grid.
///
/// The workbook format (xls or xlsx) is detected from the file extension.
pub fn load_grid(path: &Path, sheet_name: &str) -> Result<CellGrid> {
    check_extension(path)?;

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::sheet_load(path.display().to_string(), e.to_string()))?;

    if !workbook.sheet_names().iter().any(|s| s == sheet_name) {
        return Err(Error::sheet_not_found(
            sheet_name,
            path.display().to_string(),
        ));
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| Error::sheet_load(path.display().to_string(), e.to_string()))?;

    let grid = grid_from_range(&range);
    debug!(
        "Loaded worksheet '{}' from {}: {} rows",
        sheet_name,
        path.display(),
        grid.row_count()
    );
    Ok(grid)
}

/// Load one worksheet from workbook bytes already in memory.
///
/// Used by the HTTP upload path, where the file never touches disk.
pub fn load_grid_from_bytes(bytes: Vec<u8>, name: &str, sheet_name: &str) -> Result<CellGrid> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| Error::sheet_load(name, e.to_string()))?;

    if !workbook.sheet_names().iter().any(|s| s == sheet_name) {
        return Err(Error::sheet_not_found(sheet_name, name));
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| Error::sheet_load(name, e.to_string()))?;

    Ok(grid_from_range(&range))
}

/// Reject files whose extension the loader does not support
fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !crate::constants::SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::sheet_load(
            path.display().to_string(),
            format!("Invalid file format '{}'. Expected .xls or .xlsx", extension),
        ));
    }
    Ok(())
}

/// Materialize a worksheet range into an absolute-indexed grid.
///
/// A worksheet range starts at its first used cell, not at A1; the grid is
/// padded with blank rows and leading blank cells so schema row numbers map
/// onto absolute sheet positions.
fn grid_from_range(range: &Range<Data>) -> CellGrid {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(start_row as usize + range.height());
    rows.resize_with(start_row as usize, Vec::new);

    for row in range.rows() {
        let mut cells = vec![CellValue::Blank; start_col as usize];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }

    CellGrid::new(rows)
}

/// Map one workbook cell to the processor's cell model.
///
/// Booleans become 0/1 numbers, ISO date strings stay text, and error cells
/// read as blank so downstream coercions treat them as absent data.
fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Blank,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::DateTime(naive),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Blank,
    }
}
