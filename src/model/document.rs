//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{KeyValuePair, Table, TextContent};

/// A flattened analysis result.
///
/// Created once per successful analysis and never mutated afterwards.
/// Field order here fixes the key order of the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    /// Number of pages reported by the service
    pub page_count: u32,

    /// Extracted key-value pairs, in service order
    pub key_value_pairs: Vec<KeyValuePair>,

    /// Extracted tables, in service order
    pub tables: Vec<Table>,

    /// Full text and per-page lines
    pub text_content: TextContent,

    /// Aggregate statistics over all reported confidence values
    pub confidence_summary: ConfidenceSummary,
}

impl ResultDocument {
    /// Check if the document carries no extracted content.
    pub fn is_empty(&self) -> bool {
        self.key_value_pairs.is_empty()
            && self.tables.is_empty()
            && self.text_content.line_count() == 0
    }

    /// Total number of text lines across all pages.
    pub fn line_count(&self) -> usize {
        self.text_content.line_count()
    }
}

/// Summary statistics over every confidence value the service reported.
///
/// Only actually-reported confidences are counted; values the service
/// omitted are skipped, not treated as 0. All fields are 0 when the
/// service reported no confidences at all (`count == 0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSummary {
    /// Mean of all reported confidences, rounded to 3 decimals
    pub average: f64,

    /// Smallest reported confidence, rounded to 3 decimals
    pub minimum: f64,

    /// Largest reported confidence, rounded to 3 decimals
    pub maximum: f64,

    /// Number of confidence values collected
    pub count: usize,
}

impl ConfidenceSummary {
    /// Check whether any confidence values were reported.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_empty_document() {
        let doc = empty_document();
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 0);
        assert!(doc.confidence_summary.is_empty());
    }

    #[test]
    fn test_json_key_order() {
        let json = serde_json::to_string(&empty_document()).unwrap();
        let page_count = json.find("page_count").unwrap();
        let pairs = json.find("key_value_pairs").unwrap();
        let tables = json.find("tables").unwrap();
        let text = json.find("text_content").unwrap();
        let summary = json.find("confidence_summary").unwrap();
        assert!(page_count < pairs && pairs < tables && tables < text && text < summary);
    }
}
