//! Board model - a named canvas of chart widgets on a layout grid.
//!
//! A widget and its layout entry share an id and are always added and removed
//! together.

use crate::data::FilterSet;
use crate::types::{LayoutItem, Widget};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub layout: Vec<LayoutItem>,
    pub widgets: Vec<Widget>,
    /// Board-local slicers, applied on top of the global ones
    pub filters: FilterSet,
    /// Unix timestamp (seconds)
    pub created_at: u64,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            layout: Vec::new(),
            widgets: Vec::new(),
            filters: FilterSet::new(),
            created_at,
        }
    }

    pub fn widget(&self, widget_id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == widget_id)
    }

    pub fn widget_mut(&mut self, widget_id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == widget_id)
    }

    pub fn layout_item(&self, widget_id: &str) -> Option<&LayoutItem> {
        self.layout.iter().find(|l| l.i == widget_id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Where the next widget goes: columns advance by one widget width per
    /// widget and wrap, and the widget sits below whatever already occupies
    /// those columns.
    pub fn next_slot(&self, grid_columns: u32, width: u32, height: u32) -> LayoutItem {
        let grid_columns = grid_columns.max(1);
        let width = width.clamp(1, grid_columns);
        let x = (self.widgets.len() as u32 * width) % grid_columns;
        let x = if x + width > grid_columns { 0 } else { x };
        let y = self
            .layout
            .iter()
            .filter(|l| l.x < x + width && x < l.right())
            .map(LayoutItem::bottom)
            .max()
            .unwrap_or(0);
        LayoutItem::new(String::new(), x, y, width, height)
    }

    /// Append a widget together with its layout entry
    pub fn insert_widget(&mut self, widget: Widget, mut slot: LayoutItem) {
        slot.i = widget.id.clone();
        self.layout.push(slot);
        self.widgets.push(widget);
    }

    /// Remove a widget and its layout entry. Returns the widget if it existed.
    pub fn remove_widget(&mut self, widget_id: &str) -> Option<Widget> {
        let index = self.widgets.iter().position(|w| w.id == widget_id)?;
        self.layout.retain(|l| l.i != widget_id);
        Some(self.widgets.remove(index))
    }

    /// Remove every widget bound to a dataset, with its layout entry.
    ///
    /// Returns how many widgets were removed.
    pub fn remove_widgets_for_dataset(&mut self, dataset_id: &str) -> usize {
        let doomed: HashSet<String> = self
            .widgets
            .iter()
            .filter(|w| w.dataset_id == dataset_id)
            .map(|w| w.id.clone())
            .collect();
        if doomed.is_empty() {
            return 0;
        }
        self.widgets.retain(|w| !doomed.contains(&w.id));
        self.layout.retain(|l| !doomed.contains(&l.i));
        doomed.len()
    }

    /// Apply a layout change from the grid.
    ///
    /// Entries for unknown widgets are ignored; widgets absent from `layout`
    /// keep their current placement. Returns how many entries were applied.
    pub fn apply_layout(&mut self, layout: &[LayoutItem]) -> usize {
        let mut applied = 0;
        for entry in layout {
            if self.widget(&entry.i).is_none() {
                continue;
            }
            if let Some(current) = self.layout.iter_mut().find(|l| l.i == entry.i) {
                *current = entry.clone();
                applied += 1;
            }
        }
        applied
    }

    /// Distinct dataset ids referenced by widgets, in widget order
    pub fn dataset_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.widgets
            .iter()
            .map(|w| w.dataset_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Serialize the board (layout, widgets, filters) to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
