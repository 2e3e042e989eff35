//! Slicer filters
//!
//! A [`FilterSet`] maps column names to allow-lists of stringified values.
//! Values selected within one column are alternatives; columns (and the global
//! and board layers) must all be satisfied.

use crate::types::Row;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Column name → allowed values
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    selections: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for `column`, or deselect it if already selected.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, column: &str, value: &str) -> bool {
        let values = self.selections.entry(column.to_string()).or_default();
        let selected = if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        };
        if values.is_empty() {
            self.selections.remove(column);
        }
        selected
    }

    /// Replace the selection for a column. An empty list clears it.
    pub fn set<I, S>(&mut self, column: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.selections.remove(column);
        } else {
            self.selections.insert(column.to_string(), values);
        }
    }

    pub fn clear_column(&mut self, column: &str) {
        self.selections.remove(column);
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn is_selected(&self, column: &str, value: &str) -> bool {
        self.selections
            .get(column)
            .is_some_and(|values| values.contains(value))
    }

    /// Selected values for a column, in sorted order
    pub fn selected(&self, column: &str) -> Vec<&str> {
        self.selections
            .get(column)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Columns with a non-empty selection
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.selections.keys().map(String::as_str)
    }

    /// Whether a row satisfies every column of this filter.
    ///
    /// A row without a value for a filtered column passes that column.
    pub fn matches(&self, row: &Row) -> bool {
        self.selections.iter().all(|(column, allowed)| {
            allowed.is_empty()
                || row
                    .get(column)
                    .is_none_or(|cell| allowed.contains(&cell.to_string()))
        })
    }
}

/// Whether a row passes the global filters and, if given, the board filters.
pub fn row_passes(row: &Row, global: &FilterSet, local: Option<&FilterSet>) -> bool {
    global.matches(row) && local.is_none_or(|filters| filters.matches(row))
}

/// Rows passing both filter layers, in input order
pub fn filter_rows<'a>(
    rows: &'a [Row],
    global: &FilterSet,
    local: Option<&FilterSet>,
) -> Vec<&'a Row> {
    rows.iter()
        .filter(|row| row_passes(row, global, local))
        .collect()
}

/// Distinct stringified values of a column, in first-occurrence order.
///
/// Rows without the column contribute nothing.
pub fn distinct_values<'a, I>(rows: I, column: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in rows {
        if let Some(cell) = row.get(column) {
            let value = cell.to_string();
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
    }
    values
}
