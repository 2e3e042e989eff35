//! Error types for data operations
//!
//! Provides unified error handling for workbook loading and parsing.

use thiserror::Error;

/// Errors that can occur while importing a workbook
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Corrupt or unreadable workbook
    #[error("Spreadsheet parse error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// File extension is not a workbook format
    #[error("Unsupported file format: '{name}'")]
    UnsupportedFormat { name: String },

    /// Workbook has no sheets
    #[error("Workbook has no sheets")]
    NoSheets,

    /// First sheet has no data rows
    #[error("Empty sheet")]
    EmptySheet,

    /// Header row has no columns
    #[error("No columns found")]
    NoColumns,

    /// File is too large to import
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: u64 },

    /// Too many rows to keep in memory
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
