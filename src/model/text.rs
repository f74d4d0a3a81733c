//! Text content types.

use serde::{Deserialize, Serialize};

/// Full text of the document plus per-page line detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// The document's full text, verbatim as the service reported it
    pub full_text: String,

    /// Pages in document order
    pub pages: Vec<TextPage>,
}

impl TextContent {
    /// Total number of lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }

    /// Iterate over `(page_number, line)` for every line in the document.
    pub fn iter_lines(&self) -> impl Iterator<Item = (u32, &TextLine)> {
        self.pages
            .iter()
            .flat_map(|p| p.lines.iter().map(move |l| (p.page_number, l)))
    }
}

/// A single page of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPage {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Page width in the reported unit (0 when not reported)
    pub width: f64,

    /// Page height in the reported unit (0 when not reported)
    pub height: f64,

    /// Measurement unit, e.g. "inch" or "pixel" (empty when not reported)
    pub unit: String,

    /// Text lines in reading order
    pub lines: Vec<TextLine>,
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Line text
    pub content: String,

    /// Line confidence, rounded to 3 decimals (0 when the service
    /// reported none)
    pub confidence: f64,
}

impl TextLine {
    /// Create a new line.
    pub fn new(content: impl Into<String>, confidence: f64) -> Self {
        Self {
            content: content.into(),
            confidence,
        }
    }
}
