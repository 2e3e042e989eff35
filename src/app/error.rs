//! Error types for dashboard operations

use crate::data::DataError;
use thiserror::Error;

/// Errors returned by [`Dashboard`](super::Dashboard) operations.
///
/// Every error leaves the dashboard unchanged.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Import failed
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Widget not found: {0}")]
    WidgetNotFound(String),

    /// A required widget binding was left unselected
    #[error("Missing selection for {field}")]
    MissingBinding { field: String },

    /// A widget binding names a column the dataset does not have
    #[error("Column '{column}' is not in dataset '{dataset}'")]
    UnknownColumn { column: String, dataset: String },
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
