//! # unform
//!
//! Document intelligence result shaping for Rust.
//!
//! This library sends a document to a remote document-understanding
//! service (Azure Document Intelligence), flattens the nested analysis
//! result into an export-ready model, and serializes it to JSON or to a
//! multi-sheet XLSX workbook.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unform::{analyze_file, export};
//!
//! fn main() -> unform::Result<()> {
//!     // Credentials come from AZURE_DI_ENDPOINT / AZURE_DI_KEY.
//!     let doc = analyze_file("invoice.pdf")?;
//!
//!     println!("{} pages, {} key-value pairs", doc.page_count, doc.key_value_pairs.len());
//!
//!     let json = export::to_json(&doc, export::JsonFormat::Pretty)?;
//!     std::fs::write("result.json", json)?;
//!
//!     let (xlsx, _sheets) = export::to_xlsx(&doc)?;
//!     std::fs::write("result.xlsx", xlsx)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Flattening**: key-value pairs, tables, and text lines from a
//!   nested analysis payload
//! - **Confidence statistics**: average/min/max/count over every
//!   confidence the model reported
//! - **Two exporters**: round-trippable JSON and a named-sheet XLSX
//!   workbook
//! - **Credential lookup**: `.env` and environment variables, checked
//!   before any remote call

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use export::{JsonFormat, Sheet, SheetValue};
pub use model::{
    ConfidenceSummary, KeyValuePair, ResultDocument, Table, TableCell, TextContent, TextLine,
    TextPage,
};
pub use service::{AnalysisClient, AnalyzeResult, DEFAULT_MODEL};

use std::path::Path;
use std::time::Duration;

use log::debug;

/// Analyze a document from bytes, with credentials from the environment.
///
/// # Example
///
/// ```no_run
/// use unform::analyze_bytes;
///
/// let data = std::fs::read("invoice.pdf").unwrap();
/// let doc = analyze_bytes(&data).unwrap();
/// println!("Pages: {}", doc.page_count);
/// ```
pub fn analyze_bytes(document: &[u8]) -> Result<ResultDocument> {
    Unform::new().analyze_bytes(document)
}

/// Analyze a document file, with credentials from the environment.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<ResultDocument> {
    Unform::new().analyze_file(path)
}

/// Builder for configuring and running document analysis.
///
/// # Example
///
/// ```no_run
/// use unform::{Config, Unform};
///
/// let doc = Unform::new()
///     .with_config(Config::new("https://example.cognitiveservices.azure.com", "key"))
///     .with_model("prebuilt-invoice")
///     .analyze_file("invoice.pdf")?;
/// # Ok::<(), unform::Error>(())
/// ```
pub struct Unform {
    config: Option<Config>,
    model: String,
    poll_interval: Option<Duration>,
}

impl Unform {
    /// Create a new builder with the default analysis model.
    pub fn new() -> Self {
        Self {
            config: None,
            model: DEFAULT_MODEL.to_string(),
            poll_interval: None,
        }
    }

    /// Use explicit credentials instead of the environment.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the analysis model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the delay between operation status probes.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Analyze a document from bytes.
    ///
    /// Fails before any remote call when the upload is empty or the
    /// credentials are not configured. No partial document is ever
    /// returned: the remote call and the shaping either both succeed or
    /// the whole invocation fails.
    pub fn analyze_bytes(&self, document: &[u8]) -> Result<ResultDocument> {
        if document.is_empty() {
            return Err(Error::InvalidDocument("document is empty".into()));
        }

        let config = match &self.config {
            Some(config) => config.clone(),
            None => Config::from_env(),
        };
        let (endpoint, key) = config.require()?;

        let mut client = AnalysisClient::with_model(endpoint, key, &self.model)?;
        if let Some(interval) = self.poll_interval {
            client = client.with_poll_interval(interval);
        }

        let raw = client.analyze(document)?;
        debug!(
            "analysis complete: {} pages, {} key-value pairs, {} tables",
            raw.pages.len(),
            raw.key_value_pairs.len(),
            raw.tables.len()
        );

        Ok(extract::shape(&raw))
    }

    /// Analyze a document file.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<ResultDocument> {
        let bytes = std::fs::read(path)?;
        self.analyze_bytes(&bytes)
    }
}

impl Default for Unform {
    fn default() -> Self {
        Self::new()
    }
}
