use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Result, SheetError};

/// File extensions accepted for import.
pub const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Reject anything that is not an `.xlsx` or `.xls` file.
pub fn ensure_spreadsheet_path(path: &Path) -> Result<()> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);
    if accepted {
        Ok(())
    } else {
        Err(SheetError::UnsupportedExtension {
            path: path.to_path_buf(),
        })
    }
}

/// Export file name for the given day, e.g. `mir4-scouts-2025-03-01.xlsx`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("mir4-scouts-{}.xlsx", date.format("%Y-%m-%d"))
}
