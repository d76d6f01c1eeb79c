//! Roster to workbook.

use chrono::SecondsFormat;
use rust_xlsxwriter::Workbook;

use scout_model::{Scout, WIRE_FIELDS};

use crate::error::{Result, SheetError};

/// Name of the exported sheet.
pub const SHEET_NAME: &str = "Scouts";

/// Serialize the full roster into `.xlsx` bytes.
///
/// Every value is written as text so that power ratings and identifiers come
/// back exactly as they were. Empty values leave the cell blank.
pub fn export_workbook(scouts: &[Scout]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in (0u16..).zip(WIRE_FIELDS) {
        sheet.write_string(0, col, name)?;
    }
    for (index, scout) in scouts.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| SheetError::TooManyRows(scouts.len()))?;
        for (col, value) in (0u16..).zip(row_values(scout)) {
            if !value.is_empty() {
                sheet.write_string(row, col, value)?;
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::info!(records = scouts.len(), bytes = bytes.len(), "exported roster");
    Ok(bytes)
}

/// Cell values in [`WIRE_FIELDS`] order.
fn row_values(scout: &Scout) -> [String; 9] {
    [
        scout.id.to_string(),
        scout.location.clone(),
        scout.shift.map(|shift| shift.label().to_string()).unwrap_or_default(),
        scout.nickname.clone(),
        scout.power.clone(),
        scout.clan.clone(),
        scout.language.clone(),
        scout.role.clone(),
        scout.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    ]
}
