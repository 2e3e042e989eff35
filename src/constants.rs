//! Application-wide constants.
//!
//! Centralizes limits and layout defaults used across ingestion and the board
//! model.

// ============================================================================
// Data Loading
// ============================================================================

/// Maximum number of sheet rows to load
pub const MAX_SHEET_ROWS: usize = 100_000;

/// Maximum workbook file size in MB
pub const MAX_WORKBOOK_SIZE_MB: u64 = 100;

/// File extensions recognised as workbooks
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "xla", "xlam", "ods"];

/// Header used for blank header cells (numbered `__EMPTY_1`, `__EMPTY_2`, ...)
pub const EMPTY_HEADER: &str = "__EMPTY";

// ============================================================================
// Aggregation
// ============================================================================

/// Decimal places kept on aggregated values
pub const VALUE_DECIMALS: usize = 2;

// ============================================================================
// Board Layout
// ============================================================================

/// Number of columns in a board's layout grid
pub const GRID_COLUMNS: u32 = 12;

/// Default widget width in grid columns
pub const DEFAULT_WIDGET_WIDTH: u32 = 6;

/// Default widget height in grid rows
pub const DEFAULT_WIDGET_HEIGHT: u32 = 4;

/// Name given to boards created with a blank name
pub const DEFAULT_BOARD_NAME: &str = "Untitled Board";
