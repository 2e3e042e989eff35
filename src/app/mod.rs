//! Application module - the dashboard state and its operations.
//!
//! This module is organized into several submodules:
//! - `state` - The Dashboard struct definition and derived widget data
//! - `error` - Errors returned by dashboard operations
//! - `lifecycle` - Construction and settings
//! - `datasets` - Import and cascading deletion of datasets
//! - `board_management` - Board CRUD, selection, and slicers
//! - `data_viz` - Widgets, layouts, and chart data

mod board_management;
mod data_viz;
mod datasets;
mod error;
mod lifecycle;
mod state;

pub use error::{DashboardError, DashboardResult};
pub use state::{Dashboard, WidgetData};
