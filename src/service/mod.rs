//! Remote document-understanding service binding.
//!
//! The raw payload schema lives in [`schema`]; the blocking HTTP client
//! that drives the analyze/poll cycle is [`AnalysisClient`]. Everything
//! above this module works on the typed schema only.

mod client;
pub mod schema;

pub use client::{AnalysisClient, DEFAULT_MODEL};
pub use schema::AnalyzeResult;
