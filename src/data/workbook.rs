//! Workbook parsing
//!
//! Reads the first sheet of an Excel or OpenDocument workbook into a
//! [`Dataset`]: the first non-blank row supplies the column names, every later
//! non-blank row becomes a record, and columns are classified from the data.
//!
//! ## Memory Limits
//!
//! Workbooks over the configured size or row count are rejected before a
//! dataset is created (see [`Settings`]).

use crate::constants::EMPTY_HEADER;
use crate::constants::WORKBOOK_EXTENSIONS;
use crate::data::classify::classify_columns;
use crate::data::error::{DataError, DataResult};
use crate::settings::Settings;
use crate::types::{DataCell, DataOrigin, Dataset, Row};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Parse a workbook file into a Dataset named after the file stem.
pub fn parse_workbook_file(path: &Path, settings: &Settings) -> DataResult<Dataset> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DataError::UnsupportedFormat {
            name: path.display().to_string(),
        });
    }

    // Check file size before reading
    let metadata = std::fs::metadata(path)?;
    check_size(metadata.len(), settings)?;

    let bytes = std::fs::read(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Data")
        .to_string();

    let mut dataset = parse_workbook_bytes(&name, bytes, settings)?;
    dataset.origin = DataOrigin::File {
        path: path.to_path_buf(),
    };
    Ok(dataset)
}

/// Parse an in-memory workbook (format detected from content).
pub fn parse_workbook_bytes(name: &str, bytes: Vec<u8>, settings: &Settings) -> DataResult<Dataset> {
    check_size(bytes.len() as u64, settings)?;

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(DataError::NoSheets)??;

    let dataset = dataset_from_range(name, &range, settings.max_rows)?;
    info!(
        dataset = %dataset.name,
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Parsed workbook"
    );
    Ok(dataset)
}

/// Build a Dataset from a sheet range.
///
/// Blank cells are left out of each record; fully blank rows are skipped.
pub fn dataset_from_range(name: &str, range: &Range<Data>, max_rows: usize) -> DataResult<Dataset> {
    let mut sheet_rows = range
        .rows()
        .filter(|cells| cells.iter().any(|cell| convert_cell(cell).is_some()));

    let header_cells = sheet_rows.next().ok_or(DataError::EmptySheet)?;
    let headers = header_names(header_cells);

    let mut rows: Vec<Row> = Vec::new();
    for cells in sheet_rows {
        if rows.len() >= max_rows {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1,
                max_rows,
            });
        }
        let row: Row = headers
            .iter()
            .zip(cells)
            .filter_map(|(header, cell)| Some((header.clone(), convert_cell(cell)?)))
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DataError::EmptySheet);
    }

    // A blank header survives only if its column holds data
    let columns: Vec<String> = headers
        .into_iter()
        .filter(|name| !name.starts_with(EMPTY_HEADER) || rows.iter().any(|r| r.contains_key(name)))
        .collect();

    if columns.is_empty() {
        return Err(DataError::NoColumns);
    }

    let classes = classify_columns(&columns, &rows);
    debug!(
        numeric = ?classes.numeric,
        date = ?classes.date,
        text = ?classes.text,
        "Classified columns"
    );

    Ok(Dataset {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        rows,
        columns,
        numeric_columns: classes.numeric,
        date_columns: classes.date,
        text_columns: classes.text,
        origin: DataOrigin::Memory,
    })
}

fn check_size(bytes: u64, settings: &Settings) -> DataResult<()> {
    let max_bytes = settings.max_file_size_mb.saturating_mul(BYTES_PER_MB);
    if bytes > max_bytes {
        return Err(DataError::TooLarge {
            size_mb: bytes.div_ceil(BYTES_PER_MB),
            max_mb: settings.max_file_size_mb,
        });
    }
    Ok(())
}

/// Column names for a header row.
///
/// Blank headers become `__EMPTY`, `__EMPTY_1`, ...; repeated names get a
/// `_1`, `_2`, ... suffix, skipping any suffix already taken by another
/// header. Every position gets a name so that data under a blank header is
/// kept.
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(cells.len());

    for cell in cells {
        let text = convert_cell(cell)
            .map(|c| c.to_string().trim().to_string())
            .unwrap_or_default();
        let base = if text.is_empty() {
            EMPTY_HEADER.to_string()
        } else {
            text
        };

        let mut name = base.clone();
        if used.contains(&name) {
            let counter = counters.entry(base.clone()).or_insert(1);
            loop {
                name = format!("{}_{}", base, counter);
                *counter += 1;
                if !used.contains(&name) {
                    break;
                }
            }
        }
        used.insert(name.clone());
        names.push(name);
    }
    names
}

/// Convert a sheet cell, returning None for blank and error cells
fn convert_cell(cell: &Data) -> Option<DataCell> {
    match cell {
        Data::Int(value) => Some(DataCell::Number(*value as f64)),
        Data::Float(value) => Some(DataCell::Number(*value)),
        Data::String(value) if value.trim().is_empty() => None,
        Data::String(value) => Some(DataCell::Text(value.clone())),
        Data::Bool(value) => Some(DataCell::Boolean(*value)),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) if datetime.time() == chrono::NaiveTime::MIN => {
                Some(DataCell::Date(datetime.format("%Y-%m-%d").to_string()))
            }
            Some(datetime) => Some(DataCell::Date(
                datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            )),
            None => Some(DataCell::Number(value.as_f64())),
        },
        Data::DateTimeIso(value) => Some(DataCell::Date(value.clone())),
        Data::DurationIso(value) => Some(DataCell::Text(value.clone())),
        Data::Error(_) | Data::Empty => None,
    }
}
