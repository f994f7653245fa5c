//! Financial Sheet Processor Library
//!
//! A Rust library for validating semi-structured financial spreadsheets
//! against a declarative schema and extracting time-series financial
//! attributes into normalized records.
//!
//! This library provides tools for:
//! - Loading xls/xlsx workbooks into an in-memory cell grid
//! - Running an ordered battery of schema-driven validation checks
//! - Deriving company and year metadata from fixed-layout sheets
//! - Extracting (attribute, year, value) records for database storage
//! - Serving the full pipeline over an HTTP upload endpoint

pub mod config;
pub mod constants;
pub mod server;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod attribute_extractor;
        pub mod metadata_extractor;
        pub mod rule_validator;
        pub mod sheet_loader;
        pub mod sheet_processor;
    }
    pub mod adapters {
        pub mod postgres;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AccountType, CellGrid, CellValue, FinancialRecord};
pub use app::services::sheet_processor::{Outcome, SheetProcessor};
pub use config::SheetSchema;

/// Result type alias for the financial sheet processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for sheet processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("Failed to load sheet from '{path}': {message}")]
    SheetLoad { path: String, message: String },

    /// Target worksheet missing from the workbook
    #[error("Worksheet '{sheet}' not found in '{path}'")]
    SheetNotFound { sheet: String, path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Schema document error
    #[error("Schema error in '{path}': {message}")]
    Schema { path: String, message: String },

    /// Database operation failed
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// Record persistence failed outside the database layer
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Sheet failed schema validation
    #[error("Sheet validation failed with {count} error(s)")]
    ValidationFailed { count: usize },

    /// Valid sheet yielded no extractable data points
    #[error("Validation passed but no data points could be extracted from the sheet")]
    EmptyExtraction,

    /// HTTP server error
    #[error("Server error: {message}")]
    Server { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a sheet load error with context
    pub fn sheet_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SheetLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing worksheet error
    pub fn sheet_not_found(sheet: impl Into<String>, path: impl Into<String>) -> Self {
        Self::SheetNotFound {
            sheet: sheet.into(),
            path: path.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a schema document error
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a database error with context
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create a persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Create a validation failure error
    pub fn validation_failed(count: usize) -> Self {
        Self::ValidationFailed { count }
    }

    /// Create an HTTP server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::Database {
            message: "Database operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Configuration {
            message: format!("YAML parsing failed: {}", error),
        }
    }
}
