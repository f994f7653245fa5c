//! Extraction statistics and result structures
//!
//! This module provides types for tracking which (attribute, year) cells
//! produced records and why the rest were skipped, so diagnostics survive
//! as values rather than only as log lines.

use crate::app::models::FinancialRecord;

/// Extraction result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Successfully extracted records
    pub records: Vec<FinancialRecord>,

    /// Basic extraction statistics
    pub stats: ExtractionStats,
}

/// Simple extraction statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractionStats {
    /// Number of (attribute, year) cells considered
    pub cells_considered: usize,

    /// Number of records successfully extracted
    pub records_extracted: usize,

    /// Number of cells skipped because they were blank
    pub blank_cells: usize,

    /// Descriptions of cells skipped for other reasons
    pub skipped: Vec<String>,
}

impl ExtractionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            cells_considered: 0,
            records_extracted: 0,
            blank_cells: 0,
            skipped: Vec::new(),
        }
    }

    /// Share of considered cells that produced a record, as a percentage.
    ///
    /// Blank cells are expected gaps in the data and are not counted against
    /// the rate.
    pub fn success_rate(&self) -> f64 {
        let usable = self.cells_considered.saturating_sub(self.blank_cells);
        if usable == 0 {
            0.0
        } else {
            (self.records_extracted as f64 / usable as f64) * 100.0
        }
    }

    /// Check whether any cells were skipped for a reason other than blankness
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}
