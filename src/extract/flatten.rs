//! Flattening of the raw hierarchical result.
//!
//! Missing confidences flatten to 0 here. That is a display default:
//! the aggregate statistics in [`summary`](super::summary) deliberately
//! skip missing values instead.

use crate::extract::round3;
use crate::model::{KeyValuePair, Table, TableCell, TextContent, TextLine, TextPage};
use crate::service::schema::AnalyzeResult;

/// Extract key-value pairs with confidence scores.
///
/// An association is emitted only when both its key and its value carry
/// non-empty text; everything else is dropped.
pub fn key_value_pairs(result: &AnalyzeResult) -> Vec<KeyValuePair> {
    result
        .key_value_pairs
        .iter()
        .filter_map(|pair| match (&pair.key, &pair.value) {
            (Some(key), Some(value)) if !key.content.is_empty() && !value.content.is_empty() => {
                Some(KeyValuePair {
                    key: key.content.clone(),
                    value: value.content.clone(),
                    key_confidence: key.confidence.map(round3).unwrap_or(0.0),
                    value_confidence: value.confidence.map(round3).unwrap_or(0.0),
                })
            }
            _ => None,
        })
        .collect()
}

/// Extract tables with structure and confidence scores.
///
/// Tables keep their result order and are numbered from 1 by position.
/// Cell order within a table follows the service's native enumeration.
pub fn tables(result: &AnalyzeResult) -> Vec<Table> {
    result
        .tables
        .iter()
        .enumerate()
        .map(|(idx, table)| Table {
            id: idx as u32 + 1,
            row_count: table.row_count,
            column_count: table.column_count,
            confidence: table.confidence.map(round3).unwrap_or(0.0),
            cells: table
                .cells
                .iter()
                .map(|cell| TableCell {
                    content: cell.content.clone(),
                    row_index: cell.row_index,
                    column_index: cell.column_index,
                    confidence: cell.confidence.map(round3).unwrap_or(0.0),
                })
                .collect(),
        })
        .collect()
}

/// Extract the full text and per-page lines.
pub fn text_content(result: &AnalyzeResult) -> TextContent {
    TextContent {
        full_text: result.content.clone(),
        pages: result
            .pages
            .iter()
            .map(|page| TextPage {
                page_number: page.page_number,
                width: page.width.unwrap_or(0.0),
                height: page.height.unwrap_or(0.0),
                unit: page.unit.clone().unwrap_or_default(),
                lines: page
                    .lines
                    .iter()
                    .map(|line| TextLine {
                        content: line.content.clone(),
                        confidence: line.confidence.map(round3).unwrap_or(0.0),
                    })
                    .collect(),
            })
            .collect(),
    }
}
