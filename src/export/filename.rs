//! Timestamped export file names.

use chrono::{Local, NaiveDateTime};

/// Build an export file name for the current local time.
///
/// Pattern: `document_analysis_<YYYYMMDD_HHMMSS>.<ext>`.
pub fn export_filename(extension: &str) -> String {
    filename_at(Local::now().naive_local(), extension)
}

/// Build an export file name for a specific timestamp.
pub fn filename_at(time: NaiveDateTime, extension: &str) -> String {
    format!(
        "document_analysis_{}.{}",
        time.format("%Y%m%d_%H%M%S"),
        extension
    )
}
