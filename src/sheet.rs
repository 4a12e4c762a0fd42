use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::{debug, info};
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::record::{header_key, IssueRecord, HEADERS};

/// Append one record to the workbook at `path`, creating it if missing.
///
/// The header row is written when cell A1 does not hold the first header.
/// Only A1 is compared; a header row with a correct first cell is trusted
/// as-is. The whole workbook is rewritten on save and nothing is locked.
pub fn append(path: &Path, record: &IssueRecord) -> Result<()> {
    let mut book = open_or_create(path)?;
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| anyhow!("{} has no worksheets", path.display()))?;

    if sheet.get_value((1, 1)) != HEADERS[0] {
        debug!("Header row missing in {}, adding it", path.display());
        append_row(sheet, HEADERS.iter().map(|h| h.to_string()));
    }

    let row = append_row(sheet, build_row(record));
    info!("Wrote row {} to {}", row, path.display());

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| anyhow!("Failed to save {}: {}", path.display(), e))
}

/// Record values in header order. A header without a matching field
/// becomes an empty cell.
pub fn build_row(record: &IssueRecord) -> Vec<String> {
    HEADERS
        .iter()
        .map(|h| record.get(&header_key(h)).unwrap_or("").to_string())
        .collect()
}

fn open_or_create(path: &Path) -> Result<Spreadsheet> {
    if path.exists() {
        debug!("Opening {}", path.display());
        umya_spreadsheet::reader::xlsx::read(path)
            .map_err(|e| anyhow!("Failed to read {} as xlsx: {}", path.display(), e))
    } else {
        info!("{} not found, creating a new workbook", path.display());
        Ok(umya_spreadsheet::new_file())
    }
}

/// Write `values` into the row after the last used one; returns its number.
fn append_row(sheet: &mut Worksheet, values: impl IntoIterator<Item = String>) -> u32 {
    let row = sheet.get_highest_row() + 1;
    for (col, value) in (1u32..).zip(values) {
        sheet.get_cell_mut((col, row)).set_value_string(value);
    }
    row
}

// ── Tests ──
