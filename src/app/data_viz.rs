//! Data visualization methods - widgets, layouts, and derived chart data

use super::error::{DashboardError, DashboardResult};
use super::{Dashboard, WidgetData};
use crate::data::{distinct_values, filter_rows, process_chart_data, timeline_entries};
use crate::types::{LayoutItem, Row, Widget, WidgetDraft, WidgetKind};
use tracing::{debug, warn};

impl Dashboard {
    /// Check a draft against its dataset and return the bindings to store.
    fn validate_draft(&self, draft: &WidgetDraft) -> DashboardResult<WidgetKind> {
        let dataset = self
            .datasets
            .get(&draft.dataset_id)
            .ok_or_else(|| DashboardError::DatasetNotFound(draft.dataset_id.clone()))?;

        let kind = draft.kind.clone().ok_or_else(|| DashboardError::MissingBinding {
            field: "chart type".to_string(),
        })?;

        for (field, column) in kind.bindings() {
            if column.trim().is_empty() {
                return Err(DashboardError::MissingBinding {
                    field: field.to_string(),
                });
            }
            if !dataset.has_column(column) {
                return Err(DashboardError::UnknownColumn {
                    column: column.to_string(),
                    dataset: dataset.name.clone(),
                });
            }
        }
        Ok(kind)
    }

    /// Add a widget and its layout entry to a board. Returns the widget id.
    ///
    /// Nothing is created if the draft is incomplete.
    pub fn add_widget(&mut self, board_id: &str, draft: WidgetDraft) -> DashboardResult<String> {
        self.find_board(board_id)?;
        let kind = self.validate_draft(&draft).inspect_err(|e| {
            warn!("Rejected widget: {}", e);
        })?;

        let widget = Widget {
            id: uuid::Uuid::new_v4().to_string(),
            dataset_id: draft.dataset_id.clone(),
            title: draft.resolved_title(&kind),
            kind,
            options: draft.options,
        };
        let id = widget.id.clone();

        let (columns, width, height) = (
            self.settings.grid_columns,
            self.settings.widget_width,
            self.settings.widget_height,
        );
        let board = self.find_board_mut(board_id)?;
        let slot = board.next_slot(columns, width, height);
        board.insert_widget(widget, slot);
        debug!(board = %board_id, widget = %id, "Added widget");
        Ok(id)
    }

    /// Replace a widget's bindings, title and options. Its placement is kept.
    pub fn update_widget(
        &mut self,
        board_id: &str,
        widget_id: &str,
        draft: WidgetDraft,
    ) -> DashboardResult<()> {
        let kind = self.validate_draft(&draft)?;
        let title = draft.resolved_title(&kind);

        let board = self.find_board_mut(board_id)?;
        let widget = board
            .widget_mut(widget_id)
            .ok_or_else(|| DashboardError::WidgetNotFound(widget_id.to_string()))?;
        widget.dataset_id = draft.dataset_id;
        widget.title = title;
        widget.kind = kind;
        widget.options = draft.options;
        Ok(())
    }

    /// Remove a widget together with its layout entry
    pub fn remove_widget(&mut self, board_id: &str, widget_id: &str) -> DashboardResult<Widget> {
        self.find_board_mut(board_id)?
            .remove_widget(widget_id)
            .ok_or_else(|| DashboardError::WidgetNotFound(widget_id.to_string()))
    }

    /// Apply a layout reported by the grid. Returns how many entries applied.
    pub fn update_layout(&mut self, board_id: &str, layout: &[LayoutItem]) -> DashboardResult<usize> {
        Ok(self.find_board_mut(board_id)?.apply_layout(layout))
    }

    // =========================================================================
    // Derived Data
    // =========================================================================

    /// Columns present in every dataset (eligible for global slicers)
    pub fn global_common_columns(&self) -> Vec<String> {
        self.datasets.common_columns()
    }

    /// Columns present in every dataset a board's widgets use
    pub fn board_common_columns(&self, board_id: &str) -> DashboardResult<Vec<String>> {
        let board = self.find_board(board_id)?;
        Ok(self.datasets.common_columns_of(board.dataset_ids()))
    }

    /// Distinct values of a column across all datasets that have it
    pub fn slicer_values(&self, column: &str) -> Vec<String> {
        distinct_values(self.datasets.iter().flat_map(|d| d.rows.iter()), column)
    }

    /// Distinct values of a column across the datasets a board uses
    pub fn board_slicer_values(&self, board_id: &str, column: &str) -> DashboardResult<Vec<String>> {
        let board = self.find_board(board_id)?;
        let rows = board
            .dataset_ids()
            .into_iter()
            .filter_map(|id| self.datasets.get(id))
            .flat_map(|d| d.rows.iter());
        Ok(distinct_values(rows, column))
    }

    /// Rows of a dataset passing the global slicers and the board's filters
    pub fn filtered_rows(&self, board_id: &str, dataset_id: &str) -> DashboardResult<Vec<&Row>> {
        let board = self.find_board(board_id)?;
        let dataset = self
            .datasets
            .get(dataset_id)
            .ok_or_else(|| DashboardError::DatasetNotFound(dataset_id.to_string()))?;
        Ok(filter_rows(
            &dataset.rows,
            &self.global_filters,
            Some(&board.filters),
        ))
    }

    /// Chart series or timeline entries for one widget, after filtering
    pub fn widget_data(&self, board_id: &str, widget_id: &str) -> DashboardResult<WidgetData> {
        let board = self.find_board(board_id)?;
        let widget = board
            .widget(widget_id)
            .ok_or_else(|| DashboardError::WidgetNotFound(widget_id.to_string()))?;
        let rows = self.filtered_rows(board_id, &widget.dataset_id)?;

        let data = match &widget.kind {
            WidgetKind::Chart {
                category_column,
                value_column,
                aggregation,
                ..
            } => WidgetData::Chart(process_chart_data(
                rows,
                category_column,
                value_column,
                *aggregation,
                widget.options.sort_order,
                widget.options.max_points,
            )),
            WidgetKind::Timeline {
                date_column,
                label_column,
            } => {
                let mut entries = timeline_entries(rows, date_column, label_column);
                if let Some(limit) = widget.options.max_points {
                    entries.truncate(limit);
                }
                WidgetData::Timeline(entries)
            }
        };
        Ok(data)
    }
}
