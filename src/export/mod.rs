//! Export module for serializing result documents.

mod filename;
mod json;
mod sheets;
mod xlsx;

pub use filename::{export_filename, filename_at};
pub use json::{from_json, to_json, JsonFormat};
pub use sheets::{build_sheets, Sheet, SheetValue};
pub use xlsx::to_xlsx;
