//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDatasetBuilder` - Builder pattern for in-memory datasets
//! - `sales_dashboard()` - A dashboard with two related datasets
//! - `xlsx_bytes()` - A minimal real workbook for import tests
//! - Small assertion helpers

use sheetboard::data::classify_columns;
use sheetboard::types::{DataCell, DataOrigin, Dataset, Row};
use sheetboard::Dashboard;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

// ============================================================================
// TestDatasetBuilder - Builder pattern for creating test datasets
// ============================================================================

/// Builder for datasets that bypass workbook parsing.
///
/// # Example
/// ```ignore
/// let ds = TestDatasetBuilder::new("Sales", &["Region", "Amount"])
///     .row(&[text("North"), num(10.0)])
///     .build();
/// ```
pub struct TestDatasetBuilder {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TestDatasetBuilder {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row; cells line up with the columns, `DataCell::Empty` is left out.
    pub fn row(mut self, cells: &[DataCell]) -> Self {
        let row: Row = self
            .columns
            .iter()
            .zip(cells)
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(column, cell)| (column.clone(), cell.clone()))
            .collect();
        self.rows.push(row);
        self
    }

    pub fn build(self) -> Dataset {
        let classes = classify_columns(&self.columns, &self.rows);
        Dataset {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name,
            rows: self.rows,
            columns: self.columns,
            numeric_columns: classes.numeric,
            date_columns: classes.date,
            text_columns: classes.text,
            origin: DataOrigin::Memory,
        }
    }
}

pub fn text(s: &str) -> DataCell {
    DataCell::Text(s.to_string())
}

pub fn num(n: f64) -> DataCell {
    DataCell::Number(n)
}

pub fn date(s: &str) -> DataCell {
    DataCell::Date(s.to_string())
}

// ============================================================================
// Fixtures
// ============================================================================

/// Sales rows by region and product
pub fn sales_dataset() -> Dataset {
    TestDatasetBuilder::new("Sales", &["Region", "Product", "Amount", "Date"])
        .row(&[text("North"), text("Tea"), num(10.0), date("2024-01-05")])
        .row(&[text("South"), text("Coffee"), num(20.0), date("2024-01-06")])
        .row(&[text("North"), text("Coffee"), num(15.0), date("2024-01-07")])
        .row(&[text("East"), text("Tea"), num(7.5), date("2024-01-08")])
        .build()
}

/// Regional targets; shares the Region column with `sales_dataset`
pub fn targets_dataset() -> Dataset {
    TestDatasetBuilder::new("Targets", &["Region", "Target"])
        .row(&[text("North"), num(30.0)])
        .row(&[text("South"), num(25.0)])
        .row(&[text("East"), num(10.0)])
        .build()
}

/// A dashboard holding both fixtures. Returns (dashboard, sales id, targets id).
pub fn sales_dashboard() -> (Dashboard, String, String) {
    let mut dashboard = Dashboard::new();
    let sales = dashboard.add_dataset(sales_dataset());
    let targets = dashboard.add_dataset(targets_dataset());
    (dashboard, sales, targets)
}

// ============================================================================
// Workbook fixtures
// ============================================================================

/// A cell in a generated worksheet
pub enum XlsxCell<'a> {
    Text(&'a str),
    Number(f64),
    /// Excel serial day number, stored with a built-in date format
    Date(f64),
    Blank,
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

// Style 1 uses built-in number format 14 (m/d/yyyy)
const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#;

fn sheet_xml(rows: &[&[XlsxCell]]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (r, cells) in rows.iter().enumerate() {
        let row_number = r + 1;
        xml.push_str(&format!(r#"<row r="{}">"#, row_number));
        for (c, cell) in cells.iter().enumerate() {
            let reference = format!("{}{}", (b'A' + c as u8) as char, row_number);
            match cell {
                XlsxCell::Text(text) => xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    reference, text
                )),
                XlsxCell::Number(n) => {
                    xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n))
                }
                XlsxCell::Date(serial) => xml.push_str(&format!(
                    r#"<c r="{}" s="1"><v>{}</v></c>"#,
                    reference, serial
                )),
                XlsxCell::Blank => {}
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// An `.xlsx` workbook with a single sheet holding `rows`.
pub fn xlsx_bytes(rows: &[&[XlsxCell]]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let sheet = sheet_xml(rows);
    let parts: [(&str, &str); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/styles.xml", STYLES),
        ("xl/worksheets/sheet1.xml", sheet.as_str()),
    ];
    for (name, content) in parts {
        zip.start_file(name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Sales workbook: Region, Amount and an Excel date column.
///
/// Serial 45296 is 2024-01-05.
pub fn sales_workbook() -> Vec<u8> {
    xlsx_bytes(&[
        &[XlsxCell::Text("Region"), XlsxCell::Text("Amount"), XlsxCell::Text("Date")],
        &[XlsxCell::Text("North"), XlsxCell::Number(10.0), XlsxCell::Date(45296.0)],
        &[XlsxCell::Blank, XlsxCell::Blank, XlsxCell::Blank],
        &[XlsxCell::Text("South"), XlsxCell::Number(20.5), XlsxCell::Date(45297.0)],
    ])
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that every widget on every board has exactly one layout entry and
/// every layout entry has a widget.
pub fn assert_layout_consistent(dashboard: &Dashboard) {
    for board in dashboard.boards() {
        assert_eq!(
            board.widgets.len(),
            board.layout.len(),
            "board {} has mismatched widgets and layout",
            board.name
        );
        for widget in &board.widgets {
            assert!(
                board.layout_item(&widget.id).is_some(),
                "widget {} has no layout entry",
                widget.id
            );
        }
    }
}
