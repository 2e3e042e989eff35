//! Data parsing and processing module
//!
//! This module turns workbooks into datasets and datasets into chart series:
//! - `workbook` - first-sheet ingestion via calamine
//! - `classify` - numeric/date/text column classification
//! - `filter` - global and per-board slicers
//! - `chart_engine` - grouping, aggregation, sorting and timelines
//!
//! ## Error Handling
//!
//! Ingestion returns `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `Spreadsheet`: corrupt or unreadable workbook
//! - `EmptySheet`: no data rows in the first sheet
//! - `TooLarge` / `TooManyRows`: configured limits exceeded

mod chart_engine;
mod classify;
mod error;
mod filter;
mod workbook;

pub use chart_engine::*;
pub use classify::*;
pub use error::*;
pub use filter::*;
pub use workbook::*;
