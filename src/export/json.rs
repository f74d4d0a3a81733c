//! JSON serialization for result documents.

use crate::error::{Error, Result};
use crate::model::ResultDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with 2-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a result document to JSON.
///
/// Key order follows the model's field order; non-ASCII characters are
/// left unescaped. The output parses back to an equal document with
/// [`from_json`].
pub fn to_json(doc: &ResultDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Export(format!("JSON serialization error: {e}")))
}

/// Parse a result document previously serialized with [`to_json`].
pub fn from_json(json: &str) -> Result<ResultDocument> {
    serde_json::from_str(json).map_err(|e| Error::Export(format!("invalid result document: {e}")))
}
