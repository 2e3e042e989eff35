//! Chart data processing engine
//!
//! Grouping, aggregation and sorting of filtered rows happen here rather than
//! in the render path. Every function is pure; the dashboard calls them again
//! after each state change.

use crate::constants::VALUE_DECIMALS;
use crate::data::classify::parse_date;
use crate::types::{AggregationType, Row, SortOrder};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

/// Processed chart data ready for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    /// Data points with labels and values
    pub points: Vec<ChartPoint>,
    /// Category column name
    pub x_label: String,
    /// Value column name
    pub y_label: String,
    /// Maximum value for scaling
    pub max_value: f64,
    /// Minimum value for scaling
    pub min_value: f64,
}

/// A single aggregated group
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Stringified category value
    pub name: String,
    pub value: f64,
}

/// One dated entry of a timeline widget
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub date: NaiveDateTime,
    pub label: String,
}

/// Group rows by category and reduce the value column.
///
/// Groups come out in first-occurrence order of their category value. Rows
/// without the category column group under the empty string. Values are
/// rounded to two decimals.
pub fn aggregate<'a, I>(
    rows: I,
    category_column: &str,
    value_column: &str,
    aggregation: AggregationType,
) -> Vec<ChartPoint>
where
    I: IntoIterator<Item = &'a Row>,
{
    // Group raw values by label, preserving insertion order
    let mut group_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    for row in rows {
        let label = row
            .get(category_column)
            .map(|c| c.to_string())
            .unwrap_or_default();
        let value = row
            .get(value_column)
            .map(|c| c.numeric_value())
            .unwrap_or(0.0);
        if !groups.contains_key(&label) {
            group_order.push(label.clone());
        }
        groups.entry(label).or_default().push(value);
    }

    group_order
        .into_iter()
        .map(|name| {
            let values = groups.remove(&name).unwrap_or_default();
            let value = reduce(&values, aggregation);
            ChartPoint {
                name,
                value: round_half_up(value, VALUE_DECIMALS),
            }
        })
        .collect()
}

fn reduce(values: &[f64], aggregation: AggregationType) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    match aggregation {
        AggregationType::Count => values.len() as f64,
        AggregationType::Sum => values.iter().sum(),
        AggregationType::Average => values.iter().sum::<f64>() / values.len() as f64,
        AggregationType::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregationType::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

/// Round half-up on the shortest decimal representation of `value`.
///
/// Works on the printed digits, so `1.005` rounds to `1.01` even though its
/// binary value sits just below the midpoint. Ties round away from zero.
pub fn round_half_up(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if frac_part.len() <= decimals {
        return value;
    }

    let kept = format!("{}{}", int_part, &frac_part[..decimals]);
    let round_up = frac_part.as_bytes()[decimals] >= b'5';

    // Increment the kept digits as a decimal string to avoid float error
    let mut digits: Vec<u8> = kept.into_bytes();
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let text = format!(
        "{}.{}",
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    );
    let magnitude: f64 = text.parse().unwrap_or(value.abs());
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Sort points in place
pub fn sort_points(points: &mut [ChartPoint], sort_order: SortOrder) {
    match sort_order {
        SortOrder::None => {}
        SortOrder::LabelAsc => points.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::LabelDesc => points.sort_by(|a, b| b.name.cmp(&a.name)),
        SortOrder::ValueAsc => points.sort_by(|a, b| a.value.total_cmp(&b.value)),
        SortOrder::ValueDesc => points.sort_by(|a, b| b.value.total_cmp(&a.value)),
    }
}

/// Aggregate, sort and truncate into chart-ready data.
pub fn process_chart_data<'a, I>(
    rows: I,
    category_column: &str,
    value_column: &str,
    aggregation: AggregationType,
    sort_order: SortOrder,
    max_points: Option<usize>,
) -> ChartData
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut points = aggregate(rows, category_column, value_column, aggregation);
    sort_points(&mut points, sort_order);
    if let Some(limit) = max_points {
        points.truncate(limit);
    }

    let max_value = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_value = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);

    ChartData {
        points,
        x_label: category_column.to_string(),
        y_label: value_column.to_string(),
        max_value: if max_value == f64::NEG_INFINITY { 0.0 } else { max_value },
        min_value: if min_value == f64::INFINITY { 0.0 } else { min_value },
    }
}

/// Dated rows in chronological order. Rows without a parseable date are skipped.
pub fn timeline_entries<'a, I>(rows: I, date_column: &str, label_column: &str) -> Vec<TimelineEntry>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut entries: Vec<TimelineEntry> = rows
        .into_iter()
        .filter_map(|row| {
            let date = parse_date(&row.get(date_column)?.to_string())?;
            let label = row
                .get(label_column)
                .map(|c| c.to_string())
                .unwrap_or_default();
            Some(TimelineEntry { date, label })
        })
        .collect();
    entries.sort_by_key(|entry| entry.date);
    entries
}
