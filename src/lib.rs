//! sheetboard - spreadsheet dashboards.
//!
//! Import workbooks as datasets, place chart widgets on boards, and slice the
//! data with global and per-board filters. This crate holds the state and the
//! derived chart data; rendering is left to the embedding UI.

pub mod app;
pub mod board;
pub mod constants;
pub mod data;
pub mod logging;
pub mod registry;
pub mod settings;
pub mod types;

pub use app::{Dashboard, DashboardError, DashboardResult, WidgetData};
