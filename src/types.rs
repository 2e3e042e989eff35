//! Core types for the sheetboard dashboard model.
//!
//! This module defines the data structures shared by ingestion, filtering,
//! aggregation and the board model: cells and rows, datasets, and the widget
//! definitions placed on boards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Cells and Rows
// ============================================================================

/// A single loosely-typed cell value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataCell {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(String), // ISO 8601 format
    Empty,
}

impl DataCell {
    /// Coerce to a finite number the way a slicer or classifier sees it.
    ///
    /// Booleans, dates and empty cells are not numeric. Blank text counts as
    /// zero; other text must parse as a finite float.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DataCell::Number(n) if n.is_finite() => Some(*n),
            DataCell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Numeric value used by sum/average/min/max. Non-numeric cells count as 0.
    pub fn numeric_value(&self) -> f64 {
        match self {
            DataCell::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            other => other.as_number().unwrap_or(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DataCell::Empty)
    }
}

impl fmt::Display for DataCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataCell::Text(s) | DataCell::Date(s) => f.write_str(s),
            DataCell::Number(n) => {
                // Whole numbers print without a trailing ".0"
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            DataCell::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            DataCell::Empty => Ok(()),
        }
    }
}

/// A record keyed by column name. Cells left blank in the sheet are absent.
pub type Row = HashMap<String, DataCell>;

// ============================================================================
// Datasets
// ============================================================================

/// How a column was classified at import time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Date,
    #[default]
    Text,
}

impl ColumnKind {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "Numeric",
            ColumnKind::Date => "Date",
            ColumnKind::Text => "Text",
        }
    }
}

/// Where a dataset came from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataOrigin {
    /// Imported from a workbook on disk
    File { path: PathBuf },
    /// Imported from an in-memory buffer (e.g. a browser upload)
    Memory,
}

/// The parsed contents of one imported workbook.
///
/// Immutable once created; the registry only ever adds or removes whole
/// datasets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dataset {
    /// Unique identifier
    pub id: String,
    /// Human-readable name (file stem or upload name)
    pub name: String,
    /// Rows of the first sheet, in sheet order
    pub rows: Vec<Row>,
    /// Header names, in sheet order
    pub columns: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub date_columns: Vec<String>,
    /// Categorical columns. Holds every column when none classified as text.
    pub text_columns: Vec<String>,
    pub origin: DataOrigin,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// The most specific classification of a column, if it exists.
    pub fn column_kind(&self, column: &str) -> Option<ColumnKind> {
        if !self.has_column(column) {
            return None;
        }
        let kind = if self.numeric_columns.iter().any(|c| c == column) {
            ColumnKind::Numeric
        } else if self.date_columns.iter().any(|c| c == column) {
            ColumnKind::Date
        } else {
            ColumnKind::Text
        };
        Some(kind)
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Area,
    Pie,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::Line => "Line",
            ChartType::Area => "Area",
            ChartType::Pie => "Pie",
        }
    }

    pub fn all() -> &'static [ChartType] {
        &[ChartType::Bar, ChartType::Line, ChartType::Area, ChartType::Pie]
    }
}

/// Reduction applied to the value column within each category group
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationType {
    #[default]
    Sum,
    Count,
    Average,
    Min,
    Max,
}

impl AggregationType {
    pub fn label(&self) -> &'static str {
        match self {
            AggregationType::Sum => "Sum",
            AggregationType::Count => "Count",
            AggregationType::Average => "Average",
            AggregationType::Min => "Min",
            AggregationType::Max => "Max",
        }
    }

    pub fn all() -> &'static [AggregationType] {
        &[
            AggregationType::Sum,
            AggregationType::Count,
            AggregationType::Average,
            AggregationType::Min,
            AggregationType::Max,
        ]
    }
}

/// Sort order for chart data
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// No sorting - keep first-occurrence order
    #[default]
    None,
    LabelAsc,
    LabelDesc,
    ValueAsc,
    ValueDesc,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "Original",
            SortOrder::LabelAsc => "Label A→Z",
            SortOrder::LabelDesc => "Label Z→A",
            SortOrder::ValueAsc => "Value ↑",
            SortOrder::ValueDesc => "Value ↓",
        }
    }
}

// ============================================================================
// Widgets
// ============================================================================

/// Type-specific column bindings of a widget
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WidgetKind {
    /// Category/value chart
    Chart {
        chart_type: ChartType,
        category_column: String,
        value_column: String,
        aggregation: AggregationType,
    },
    /// Dated events listed in chronological order
    Timeline {
        date_column: String,
        label_column: String,
    },
}

impl WidgetKind {
    pub fn label(&self) -> &'static str {
        match self {
            WidgetKind::Chart { chart_type, .. } => chart_type.label(),
            WidgetKind::Timeline { .. } => "Timeline",
        }
    }

    /// Bound columns as `(binding name, column)` pairs
    pub fn bindings(&self) -> Vec<(&'static str, &str)> {
        match self {
            WidgetKind::Chart {
                category_column,
                value_column,
                ..
            } => vec![
                ("category_column", category_column.as_str()),
                ("value_column", value_column.as_str()),
            ],
            WidgetKind::Timeline {
                date_column,
                label_column,
            } => vec![
                ("date_column", date_column.as_str()),
                ("label_column", label_column.as_str()),
            ],
        }
    }

    fn default_title(&self) -> String {
        match self {
            WidgetKind::Chart {
                category_column,
                value_column,
                aggregation,
                ..
            } => format!(
                "{} of {} by {}",
                aggregation.label(),
                value_column,
                category_column
            ),
            WidgetKind::Timeline {
                date_column,
                label_column,
            } => format!("{} over {}", label_column, date_column),
        }
    }
}

/// Display options that do not affect which rows are aggregated
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub sort_order: SortOrder,
    /// Keep only the first N points after sorting
    pub max_points: Option<usize>,
    /// Series color as hex string (e.g., "#3b82f6")
    pub color: Option<String>,
    pub show_legend: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            max_points: None,
            color: None,
            show_legend: true,
        }
    }
}

/// One chart or timeline bound to a dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    /// Weak reference to a dataset in the registry
    pub dataset_id: String,
    pub title: String,
    pub kind: WidgetKind,
    pub options: WidgetOptions,
}

/// User input for creating or editing a widget.
///
/// Bindings left blank are rejected by the dashboard before anything is
/// created.
#[derive(Clone, Debug, Default)]
pub struct WidgetDraft {
    pub dataset_id: String,
    pub title: Option<String>,
    pub kind: Option<WidgetKind>,
    pub options: WidgetOptions,
}

impl WidgetDraft {
    pub fn chart(
        dataset_id: impl Into<String>,
        chart_type: ChartType,
        category_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            kind: Some(WidgetKind::Chart {
                chart_type,
                category_column: category_column.into(),
                value_column: value_column.into(),
                aggregation: AggregationType::default(),
            }),
            ..Default::default()
        }
    }

    pub fn timeline(
        dataset_id: impl Into<String>,
        date_column: impl Into<String>,
        label_column: impl Into<String>,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            kind: Some(WidgetKind::Timeline {
                date_column: date_column.into(),
                label_column: label_column.into(),
            }),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the aggregation; no-op for timelines.
    pub fn with_aggregation(mut self, aggregation: AggregationType) -> Self {
        if let Some(WidgetKind::Chart {
            aggregation: current,
            ..
        }) = &mut self.kind
        {
            *current = aggregation;
        }
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.options.sort_order = sort_order;
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.options.max_points = Some(max_points);
        self
    }

    /// Title to use when the draft has none (or a blank one)
    pub fn resolved_title(&self, kind: &WidgetKind) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => kind.default_title(),
        }
    }
}

/// A widget placement rectangle on a board's grid, keyed by widget id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Widget id
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl LayoutItem {
    pub fn new(widget_id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            i: widget_id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// First grid row below this item
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// First grid column right of this item
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }
}
