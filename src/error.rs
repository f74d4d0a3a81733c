//! Error types for unform library.

use std::io;
use thiserror::Error;

/// Result type alias for unform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document analysis and export.
#[derive(Error, Debug)]
pub enum Error {
    /// Required credentials are not configured.
    #[error("Missing Azure Document Intelligence credentials: {}", .missing.join(", "))]
    Configuration {
        /// Names of the unset environment variables
        missing: Vec<String>,
    },

    /// The remote client could not be constructed.
    #[error("Failed to initialize analysis client: {0}")]
    ClientInit(String),

    /// The remote analysis call failed, or the service returned a result
    /// that could not be interpreted.
    #[error("Document analysis failed: {0}")]
    Analysis(String),

    /// The uploaded document is not analyzable.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Error serializing a result document (JSON or spreadsheet).
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::ClientInit(err.to_string())
        } else {
            Error::Analysis(err.to_string())
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Export(err.to_string())
    }
}
