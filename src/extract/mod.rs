//! Result shaping: flattening and confidence aggregation.
//!
//! Pure transforms from a raw [`AnalyzeResult`](crate::service::schema::AnalyzeResult)
//! into the flat [`ResultDocument`](crate::model::ResultDocument) model.
//! Nothing here performs I/O; the raw result is read once and discarded.

mod flatten;
mod summary;

pub use flatten::{key_value_pairs, tables, text_content};
pub use summary::confidence_summary;

use crate::model::ResultDocument;
use crate::service::schema::AnalyzeResult;

/// Shape a raw analysis result into a [`ResultDocument`].
pub fn shape(result: &AnalyzeResult) -> ResultDocument {
    ResultDocument {
        page_count: result.pages.len() as u32,
        key_value_pairs: key_value_pairs(result),
        tables: tables(result),
        text_content: text_content(result),
        confidence_summary: confidence_summary(result),
    }
}

/// Round a confidence to 3 decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
