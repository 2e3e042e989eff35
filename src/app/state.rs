//! Dashboard state - the single owner of datasets, boards and slicers.

use super::error::{DashboardError, DashboardResult};
use crate::board::Board;
use crate::data::{ChartData, FilterSet, TimelineEntry};
use crate::registry::DatasetRegistry;
use crate::settings::Settings;
use serde::Serialize;

/// Top-level dashboard state.
///
/// All mutation goes through `&mut self` methods, each of which either
/// completes or returns an error without changing anything.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub(crate) settings: Settings,
    pub(crate) datasets: DatasetRegistry,
    pub(crate) boards: Vec<Board>,
    /// Slicers applied to every dataset containing the column
    pub(crate) global_filters: FilterSet,
    /// Board currently shown, if any
    pub(crate) active_board: Option<String>,
}

/// Derived data for rendering one widget
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum WidgetData {
    Chart(ChartData),
    Timeline(Vec<TimelineEntry>),
}

impl Dashboard {
    pub(crate) fn find_board(&self, board_id: &str) -> DashboardResult<&Board> {
        self.boards
            .iter()
            .find(|b| b.id == board_id)
            .ok_or_else(|| DashboardError::BoardNotFound(board_id.to_string()))
    }

    pub(crate) fn find_board_mut(&mut self, board_id: &str) -> DashboardResult<&mut Board> {
        self.boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or_else(|| DashboardError::BoardNotFound(board_id.to_string()))
    }
}
