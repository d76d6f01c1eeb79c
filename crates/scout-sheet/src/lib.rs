//! Spreadsheet import/export for the scout roster.
//!
//! Export writes a single `Scouts` sheet whose header row holds the record
//! wire names (`id`, `mapa`, `turnoPrincipal`, ...). Import reads the first
//! sheet of an `.xlsx`/`.xls` workbook, treats its first row as the header
//! and maps every non-blank row to a [`scout_model::Scout`], filling in
//! defaults for missing identifiers, languages and timestamps.
//!
//! An import either yields the full record list or an error; there is no
//! partial result.

mod error;
mod export;
mod import;
mod path;

pub use error::{Result, RowError, SheetError};
pub use export::{SHEET_NAME, export_workbook};
pub use import::{ImportedRow, import_file, import_workbook, parse_timestamp};
pub use path::{SPREADSHEET_EXTENSIONS, ensure_spreadsheet_path, export_file_name};
