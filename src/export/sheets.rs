//! Named rectangular sheets built from a result document.
//!
//! Sheet construction is pure and independent of the workbook writer, so
//! the exact tabular content can be inspected and tested without touching
//! the binary container format.

use indexmap::IndexMap;

use crate::model::ResultDocument;

/// A single value in a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetValue {
    /// Text cell
    Text(String),
    /// Numeric cell
    Number(f64),
}

impl From<&str> for SheetValue {
    fn from(value: &str) -> Self {
        SheetValue::Text(value.to_string())
    }
}

impl From<String> for SheetValue {
    fn from(value: String) -> Self {
        SheetValue::Text(value)
    }
}

impl From<f64> for SheetValue {
    fn from(value: f64) -> Self {
        SheetValue::Number(value)
    }
}

impl From<u32> for SheetValue {
    fn from(value: u32) -> Self {
        SheetValue::Number(value as f64)
    }
}

/// A named rectangular table destined for one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Worksheet name
    pub name: String,

    /// Column headers; empty for headerless grids
    pub columns: Vec<String>,

    /// Data rows
    pub rows: Vec<Vec<SheetValue>>,
}

impl Sheet {
    /// Create an empty headerless sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set column headers and return self.
    pub fn with_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append a data row.
    pub fn push_row(&mut self, row: Vec<SheetValue>) {
        self.rows.push(row);
    }

    /// Number of data rows (headers excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the named sheets for a result document.
///
/// Sheets are emitted only when their source data is non-empty:
///
/// - `Key_Value_Pairs` — one row per extracted pair
/// - `Table_<n>` — the dense content grid of each table that has cells
/// - `Text_Lines` — one row per line across all pages
/// - `Confidence_Summary` — a single statistics row, when any confidence
///   was reported
///
/// An empty document therefore produces an empty map.
pub fn build_sheets(doc: &ResultDocument) -> IndexMap<String, Sheet> {
    let mut sheets = IndexMap::new();

    if !doc.key_value_pairs.is_empty() {
        let mut sheet = Sheet::new("Key_Value_Pairs").with_columns([
            "key",
            "value",
            "key_confidence",
            "value_confidence",
        ]);
        for pair in &doc.key_value_pairs {
            sheet.push_row(vec![
                pair.key.as_str().into(),
                pair.value.as_str().into(),
                pair.key_confidence.into(),
                pair.value_confidence.into(),
            ]);
        }
        sheets.insert(sheet.name.clone(), sheet);
    }

    for table in &doc.tables {
        if table.is_empty() {
            continue;
        }
        let mut sheet = Sheet::new(format!("Table_{}", table.id));
        for row in table.grid() {
            sheet.push_row(row.into_iter().map(SheetValue::Text).collect());
        }
        sheets.insert(sheet.name.clone(), sheet);
    }

    if doc.text_content.line_count() > 0 {
        let mut sheet = Sheet::new("Text_Lines").with_columns(["page", "content", "confidence"]);
        for (page_number, line) in doc.text_content.iter_lines() {
            sheet.push_row(vec![
                page_number.into(),
                line.content.as_str().into(),
                line.confidence.into(),
            ]);
        }
        sheets.insert(sheet.name.clone(), sheet);
    }

    if !doc.confidence_summary.is_empty() {
        let mut sheet = Sheet::new("Confidence_Summary").with_columns([
            "average",
            "minimum",
            "maximum",
            "count",
        ]);
        sheet.push_row(vec![
            doc.confidence_summary.average.into(),
            doc.confidence_summary.minimum.into(),
            doc.confidence_summary.maximum.into(),
            SheetValue::Number(doc.confidence_summary.count as f64),
        ]);
        sheets.insert(sheet.name.clone(), sheet);
    }

    sheets
}
