//! Validation result accumulation
//!
//! The report collects every error and warning produced by the check
//! battery. It is append-only: adding an error marks the report invalid
//! and nothing ever reverts that.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Accumulated outcome of one validation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the sheet passed validation; false as soon as any error lands
    pub is_valid: bool,

    /// Errors, in the order the checks produced them
    pub errors: Vec<String>,

    /// Warnings, in the order the checks produced them
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty, valid report
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Append an error and mark the report invalid
    pub fn add_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.errors.push(message);
        self.is_valid = false;
    }

    /// Append a warning; warnings never affect validity
    pub fn add_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.warnings.push(message);
    }

    /// Number of errors collected
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of warnings collected
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// One-line summary for log output
    pub fn summary(&self) -> String {
        format!(
            "{}: {} error(s), {} warning(s)",
            if self.is_valid { "valid" } else { "invalid" },
            self.errors.len(),
            self.warnings.len()
        )
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
