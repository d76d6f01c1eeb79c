//! Workbook to roster.

use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use scout_model::{DEFAULT_LANGUAGE, Scout, ScoutId, Shift};

use crate::error::{Result, RowError, SheetError};
use crate::path::ensure_spreadsheet_path;

/// One spreadsheet row, with every field optional.
///
/// Empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedRow {
    pub id: Option<String>,
    pub location: Option<String>,
    pub shift: Option<String>,
    pub nickname: Option<String>,
    pub power: Option<String>,
    pub clan: Option<String>,
    pub language: Option<String>,
    pub role: Option<String>,
    pub timestamp: Option<String>,
}

impl ImportedRow {
    /// Map the row to a record, applying defaults field by field:
    /// a fresh id, language `PT`, timestamp `now`, empty text elsewhere.
    pub fn into_scout(self, now: DateTime<Utc>) -> std::result::Result<Scout, RowError> {
        let shift = match present(self.shift) {
            Some(raw) => Some(raw.parse::<Shift>()?),
            None => None,
        };
        let created_at = match present(self.timestamp) {
            Some(raw) => parse_timestamp(&raw).ok_or(RowError::Timestamp(raw))?,
            None => now,
        };
        Ok(Scout {
            id: present(self.id).map_or_else(ScoutId::generate, ScoutId::from),
            location: present(self.location).unwrap_or_default(),
            shift,
            nickname: present(self.nickname).unwrap_or_default(),
            power: present(self.power).unwrap_or_default(),
            clan: present(self.clan).unwrap_or_default(),
            language: present(self.language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            role: present(self.role).unwrap_or_default(),
            created_at,
        })
    }

    fn set(&mut self, column: &str, value: String) {
        let slot = match column.trim().to_lowercase().as_str() {
            "id" => &mut self.id,
            "mapa" => &mut self.location,
            "turnoprincipal" => &mut self.shift,
            "nick" => &mut self.nickname,
            "poder" => &mut self.power,
            "cla" => &mut self.clan,
            "idioma" => &mut self.language,
            "funcaowb" => &mut self.role,
            "timestamp" => &mut self.timestamp,
            _ => return,
        };
        *slot = Some(value);
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC;
/// a bare date means midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse workbook bytes into records.
///
/// # Errors
///
/// Fails on an unreadable workbook, a workbook without sheets, a row with an
/// unknown shift or timestamp, or two rows sharing an identifier.
pub fn import_workbook(bytes: &[u8], now: DateTime<Utc>) -> Result<Vec<Scout>> {
    let rows = read_first_sheet(bytes)?;
    let mut seen: HashSet<ScoutId> = HashSet::with_capacity(rows.len());
    let mut scouts = Vec::with_capacity(rows.len());
    for (row, imported) in rows {
        let scout = imported
            .into_scout(now)
            .map_err(|source| SheetError::InvalidRow { row, source })?;
        if !seen.insert(scout.id.clone()) {
            return Err(SheetError::DuplicateId {
                row,
                id: scout.id.to_string(),
            });
        }
        scouts.push(scout);
    }
    tracing::info!(records = scouts.len(), "imported roster");
    Ok(scouts)
}

/// Read and import a workbook file.
///
/// # Errors
///
/// Rejects files without an `.xlsx`/`.xls` extension, files that cannot be
/// read, and everything [`import_workbook`] rejects.
pub fn import_file(path: &Path, now: DateTime<Utc>) -> Result<Vec<Scout>> {
    ensure_spreadsheet_path(path)?;
    let bytes = fs::read(path).map_err(|source| SheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read workbook");
    import_workbook(&bytes, now)
}

/// Non-blank data rows of the first sheet, with their 1-based row numbers.
fn read_first_sheet(bytes: &[u8]) -> Result<Vec<(usize, ImportedRow)>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(SheetError::NoSheets)??;
    let first_row = range.start().map_or(0, |(row, _)| row as usize);

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        tracing::debug!("first sheet is empty");
        return Ok(Vec::new());
    };
    let columns: Vec<String> = header
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();
    tracing::debug!(columns = ?columns, "read header row");

    let mut imported = Vec::new();
    for (offset, cells) in rows.enumerate() {
        let mut row = ImportedRow::default();
        let mut blank = true;
        for (column, cell) in columns.iter().zip(cells) {
            if let Some(value) = cell_text(cell) {
                blank = false;
                row.set(column, value);
            }
        }
        if !blank {
            // +1 for the header, +1 for 1-based numbering.
            imported.push((first_row + offset + 2, row));
        }
    }
    Ok(imported)
}

/// Text content of a cell, `None` for empty cells.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_number(*value),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value
            .as_datetime()?
            .format("%Y-%m-%dT%H:%M:%S%.f")
            .to_string(),
        Data::Error(_) | Data::Empty => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Whole numbers without a trailing `.0`, as a spreadsheet displays them.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
