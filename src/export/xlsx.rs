//! XLSX workbook writing.

use indexmap::IndexMap;
use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::export::sheets::{build_sheets, Sheet, SheetValue};
use crate::model::ResultDocument;

/// Serialize a result document to an XLSX workbook.
///
/// Returns the workbook bytes together with the named sheets they were
/// built from, so callers can inspect the tabular content without
/// re-parsing the container.
pub fn to_xlsx(doc: &ResultDocument) -> Result<(Vec<u8>, IndexMap<String, Sheet>)> {
    let sheets = build_sheets(doc);
    let bytes = write_workbook(&sheets)?;
    Ok((bytes, sheets))
}

fn write_workbook(sheets: &IndexMap<String, Sheet>) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    // The container format requires at least one worksheet.
    if sheets.is_empty() {
        workbook.add_worksheet();
    }

    for sheet in sheets.values() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        let mut row = 0u32;
        if !sheet.columns.is_empty() {
            for (col, header) in sheet.columns.iter().enumerate() {
                worksheet.write_string(0, col as u16, header)?;
            }
            row = 1;
        }

        for data_row in &sheet.rows {
            for (col, value) in data_row.iter().enumerate() {
                match value {
                    SheetValue::Text(text) => worksheet.write_string(row, col as u16, text)?,
                    SheetValue::Number(number) => worksheet.write_number(row, col as u16, *number)?,
                };
            }
            row += 1;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
