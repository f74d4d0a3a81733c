//! Typed schema for the service's analysis payload.
//!
//! The service returns a nested camelCase JSON document. Deserializing
//! into these types is the single point where the payload's shape is
//! validated; the flattener and aggregator never touch raw JSON. Fields
//! the service may omit (older API versions, models that do not report
//! per-field confidence) are `Option` or defaulted collections.

use serde::Deserialize;

/// Raw hierarchical output of a document analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// API version that produced this result
    #[serde(default)]
    pub api_version: String,

    /// Model that produced this result
    #[serde(default)]
    pub model_id: String,

    /// Full text of the document
    #[serde(default)]
    pub content: String,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<DocumentPage>,

    /// Key-value associations
    #[serde(default)]
    pub key_value_pairs: Vec<DocumentKeyValuePair>,

    /// Tables in document order
    #[serde(default)]
    pub tables: Vec<DocumentTable>,
}

/// A single page of the raw result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Page width in `unit`
    pub width: Option<f64>,

    /// Page height in `unit`
    pub height: Option<f64>,

    /// Measurement unit, e.g. "inch" or "pixel"
    pub unit: Option<String>,

    /// Text lines in reading order
    #[serde(default)]
    pub lines: Vec<DocumentLine>,
}

/// A text line on a page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLine {
    /// Line text
    #[serde(default)]
    pub content: String,

    /// Extraction confidence in [0, 1], when the model reports one
    pub confidence: Option<f64>,
}

/// A key-value association. Either side may be absent when the service
/// found a label without a value (or vice versa).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentKeyValuePair {
    /// The field label
    pub key: Option<DocumentKeyValueElement>,

    /// The field value
    pub value: Option<DocumentKeyValueElement>,
}

/// One side of a key-value association.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentKeyValueElement {
    /// Element text
    #[serde(default)]
    pub content: String,

    /// Extraction confidence in [0, 1], when the model reports one
    pub confidence: Option<f64>,
}

/// A table in the raw result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTable {
    /// Number of rows
    pub row_count: u32,

    /// Number of columns
    pub column_count: u32,

    /// Table-level confidence in [0, 1], when the model reports one
    pub confidence: Option<f64>,

    /// Cells in the service's native enumeration order
    #[serde(default)]
    pub cells: Vec<DocumentTableCell>,
}

/// A cell of a raw table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTableCell {
    /// Cell text
    #[serde(default)]
    pub content: String,

    /// 0-based row position
    #[serde(default)]
    pub row_index: u32,

    /// 0-based column position
    #[serde(default)]
    pub column_index: u32,

    /// Cell-level confidence in [0, 1], when the model reports one
    pub confidence: Option<f64>,
}

/// Envelope of the long-running analyze operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeOperation {
    pub status: OperationStatus,
    pub error: Option<ServiceError>,
    pub analyze_result: Option<AnalyzeResult>,
}

/// Status of the analyze operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum OperationStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

/// Error detail reported by the service on a failed operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_analyze_result() {
        let json = r#"{
            "apiVersion": "2023-07-31",
            "modelId": "prebuilt-document",
            "content": "Invoice No 12345",
            "pages": [{
                "pageNumber": 1,
                "width": 8.5,
                "height": 11.0,
                "unit": "inch",
                "lines": [{"content": "Invoice No 12345", "confidence": 0.98}]
            }],
            "keyValuePairs": [{
                "key": {"content": "Invoice No", "confidence": 0.95},
                "value": {"content": "12345", "confidence": 0.88}
            }],
            "tables": [{
                "rowCount": 1,
                "columnCount": 2,
                "cells": [
                    {"content": "Qty", "rowIndex": 0, "columnIndex": 0},
                    {"content": "3", "rowIndex": 0, "columnIndex": 1, "confidence": 0.7}
                ]
            }]
        }"#;

        let result: AnalyzeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.model_id, "prebuilt-document");
        assert_eq!(result.pages.len(), 1);
        assert_eq!(result.pages[0].lines[0].confidence, Some(0.98));
        assert_eq!(result.key_value_pairs.len(), 1);
        assert_eq!(result.tables[0].cells[0].confidence, None);
        assert_eq!(result.tables[0].cells[1].confidence, Some(0.7));
    }

    #[test]
    fn test_deserialize_minimal_result() {
        // Models that report neither tables nor key-value pairs.
        let json = r#"{"content": "", "pages": []}"#;
        let result: AnalyzeResult = serde_json::from_str(json).unwrap();
        assert!(result.pages.is_empty());
        assert!(result.key_value_pairs.is_empty());
        assert!(result.tables.is_empty());
    }

    #[test]
    fn test_deserialize_operation_status() {
        let json = r#"{"status": "running"}"#;
        let op: AnalyzeOperation = serde_json::from_str(json).unwrap();
        assert_eq!(op.status, OperationStatus::Running);
        assert!(op.analyze_result.is_none());

        let json = r#"{
            "status": "failed",
            "error": {"code": "InvalidRequest", "message": "bad document"}
        }"#;
        let op: AnalyzeOperation = serde_json::from_str(json).unwrap();
        assert_eq!(op.status, OperationStatus::Failed);
        assert_eq!(op.error.unwrap().code, "InvalidRequest");
    }
}
