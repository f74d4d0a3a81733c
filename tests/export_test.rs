//! Integration tests for the JSON and XLSX exporters.

use unform::export::{self, JsonFormat, SheetValue};
use unform::{
    ConfidenceSummary, KeyValuePair, ResultDocument, Table, TableCell, TextContent, TextLine,
    TextPage,
};

fn sample_document() -> ResultDocument {
    ResultDocument {
        page_count: 1,
        key_value_pairs: vec![
            KeyValuePair::new("Invoice No", "12345", 0.95, 0.88),
            KeyValuePair::new("Tëst Ünïcode", "值", 0.5, 0.0),
        ],
        tables: vec![Table {
            id: 1,
            row_count: 2,
            column_count: 2,
            confidence: 0.8,
            cells: vec![TableCell::new("A", 0, 0), TableCell::new("B", 1, 1)],
        }],
        text_content: TextContent {
            full_text: "Invoice No 12345".into(),
            pages: vec![TextPage {
                page_number: 1,
                width: 8.5,
                height: 11.0,
                unit: "inch".into(),
                lines: vec![TextLine::new("Invoice No 12345", 0.97)],
            }],
        },
        confidence_summary: ConfidenceSummary {
            average: 0.82,
            minimum: 0.5,
            maximum: 0.97,
            count: 5,
        },
    }
}

fn empty_document() -> ResultDocument {
    ResultDocument {
        page_count: 0,
        key_value_pairs: Vec::new(),
        tables: Vec::new(),
        text_content: TextContent::default(),
        confidence_summary: ConfidenceSummary::default(),
    }
}

#[test]
fn test_json_round_trip() {
    let doc = sample_document();
    for format in [JsonFormat::Pretty, JsonFormat::Compact] {
        let json = export::to_json(&doc, format).unwrap();
        let parsed = export::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}

#[test]
fn test_json_round_trip_empty_document() {
    let doc = empty_document();
    let json = export::to_json(&doc, JsonFormat::Pretty).unwrap();
    assert_eq!(export::from_json(&json).unwrap(), doc);
}

#[test]
fn test_json_preserves_unicode() {
    let json = export::to_json(&sample_document(), JsonFormat::Pretty).unwrap();
    assert!(json.contains("Tëst Ünïcode"));
    assert!(json.contains('值'));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_json_round_trip_from_file() {
    // The CLI `export` command reads a saved result back from disk.
    let doc = sample_document();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");

    std::fs::write(&path, export::to_json(&doc, JsonFormat::Pretty).unwrap()).unwrap();
    let loaded = export::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn test_workbook_contains_expected_sheets() {
    let (bytes, sheets) = export::to_xlsx(&sample_document()).unwrap();

    assert_eq!(&bytes[..2], b"PK");
    let names: Vec<&str> = sheets.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "Key_Value_Pairs",
            "Table_1",
            "Text_Lines",
            "Confidence_Summary"
        ]
    );
}

#[test]
fn test_workbook_grid_reconstruction() {
    let (_bytes, sheets) = export::to_xlsx(&sample_document()).unwrap();
    let grid = &sheets["Table_1"];

    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.rows[0][0], SheetValue::Text("A".into()));
    assert_eq!(grid.rows[0][1], SheetValue::Text(String::new()));
    assert_eq!(grid.rows[1][0], SheetValue::Text(String::new()));
    assert_eq!(grid.rows[1][1], SheetValue::Text("B".into()));
}

#[test]
fn test_empty_document_emits_no_sheets() {
    let (bytes, sheets) = export::to_xlsx(&empty_document()).unwrap();
    assert!(sheets.is_empty());
    // Still a valid workbook container.
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_filenames_share_timestamp_format() {
    let time = chrono::NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();

    assert_eq!(
        export::filename_at(time, "json"),
        "document_analysis_20260102_030405.json"
    );
    assert_eq!(
        export::filename_at(time, "xlsx"),
        "document_analysis_20260102_030405.xlsx"
    );
}
