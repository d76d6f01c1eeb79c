//! Error types for spreadsheet import and export.

use std::path::PathBuf;
use thiserror::Error;

use scout_model::ModelError;

/// Why a single imported row could not become a record.
#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Shift(#[from] ModelError),

    #[error("unrecognized timestamp '{0}'")]
    Timestamp(String),
}

#[derive(Debug, Error)]
pub enum SheetError {
    /// The bytes are not a readable workbook.
    #[error("could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook writer failed.
    #[error("could not write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: RowError,
    },

    #[error("row {row}: duplicate id {id}")]
    DuplicateId { row: usize, id: String },

    #[error("too many records for one sheet: {0}")]
    TooManyRows(usize),

    /// Only `.xlsx` and `.xls` files are accepted.
    #[error("unsupported file type: {path} (expected .xlsx or .xls)")]
    UnsupportedExtension { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SheetError>;
