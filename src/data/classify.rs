//! Column classification
//!
//! Sorts a dataset's columns into numeric, date and text buckets from a
//! single sample value per column.

use crate::types::{ColumnKind, DataCell, Row};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only layouts accepted by [`parse_date`]
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Date-time layouts accepted by [`parse_date`]
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Columns split by kind, each in header order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnClasses {
    pub numeric: Vec<String>,
    pub date: Vec<String>,
    pub text: Vec<String>,
}

/// Parse a date or date-time string
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

/// Classify a single sample value. Numeric wins over date, date over text.
pub fn classify_value(cell: &DataCell) -> ColumnKind {
    if cell.as_number().is_some() {
        return ColumnKind::Numeric;
    }
    let text = match cell {
        DataCell::Text(s) | DataCell::Date(s) => s.as_str(),
        _ => return ColumnKind::Text,
    };
    if (text.contains('-') || text.contains('/')) && parse_date(text).is_some() {
        ColumnKind::Date
    } else {
        ColumnKind::Text
    }
}

/// Classify every column from its sample value.
///
/// The sample is the column's cell in the first row; when the first row has
/// no value for a column, the first non-empty cell further down is used. If
/// nothing lands in the text bucket, all columns are added to it so there is
/// always a categorical axis to group by.
pub fn classify_columns(columns: &[String], rows: &[Row]) -> ColumnClasses {
    let mut classes = ColumnClasses::default();

    for column in columns {
        let sample = rows
            .iter()
            .filter_map(|row| row.get(column))
            .find(|cell| !cell.is_empty());

        let kind = sample.map(classify_value).unwrap_or_default();
        match kind {
            ColumnKind::Numeric => classes.numeric.push(column.clone()),
            ColumnKind::Date => classes.date.push(column.clone()),
            ColumnKind::Text => classes.text.push(column.clone()),
        }
    }

    if classes.text.is_empty() {
        classes.text = columns.to_vec();
    }

    classes
}
