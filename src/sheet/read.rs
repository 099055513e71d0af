// src/sheet/read.rs

use crate::errors::{AppError, AppResult};
use crate::models::{COLUMN_COUNT, Table};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Load a source table: a `.csv` extension means comma-delimited text with
/// a header row, anything else is opened as a spreadsheet workbook (first
/// sheet, header row).
///
/// Header text is ignored beyond its count: columns are renamed
/// positionally onto the canonical schema, and any count other than eight
/// is a shape error.
pub fn read_source(path: &Path) -> AppResult<Table> {
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        read_csv_source(path)
    } else {
        read_workbook_source(path)
    }
}

fn read_csv_source(path: &Path) -> AppResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::DataLoad(e.to_string()))?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::DataLoad(e.to_string()))?;
    if headers.len() != COLUMN_COUNT {
        return Err(AppError::SchemaShape {
            expected: COLUMN_COUNT,
            found: headers.len(),
        });
    }

    let mut table = Table::new();
    for record in rdr.records() {
        let record = record.map_err(|e| AppError::DataLoad(e.to_string()))?;
        if record.len() != COLUMN_COUNT {
            return Err(AppError::SchemaShape {
                expected: COLUMN_COUNT,
                found: record.len(),
            });
        }
        table.push_row(record.iter().map(str::to_string).collect())?;
    }

    Ok(table)
}

fn read_workbook_source(path: &Path) -> AppResult<Table> {
    let range = first_sheet_range(path).map_err(AppError::DataLoad)?;

    if range.is_empty() {
        return Err(AppError::DataLoad(format!(
            "no header row in '{}'",
            path.display()
        )));
    }
    if range.width() != COLUMN_COUNT {
        return Err(AppError::SchemaShape {
            expected: COLUMN_COUNT,
            found: range.width(),
        });
    }

    let mut table = Table::new();
    for row in range.rows().skip(1) {
        table.push_row(row.iter().map(cell_text).collect())?;
    }

    Ok(table)
}

/// Load the target spreadsheet as a headerless table of the canonical
/// schema. Missing, corrupt or wrong-shape targets come back empty: the
/// merge deliberately bootstraps a fresh target instead of failing.
pub fn read_target(path: &Path) -> Table {
    let range = match first_sheet_range(path) {
        Ok(r) => r,
        Err(_) => return Table::new(),
    };

    if range.width() != COLUMN_COUNT {
        return Table::new();
    }

    let mut table = Table::new();
    for row in range.rows() {
        if table.push_row(row.iter().map(cell_text).collect()).is_err() {
            return Table::new();
        }
    }
    table
}

fn first_sheet_range(path: &Path) -> Result<calamine::Range<Data>, String> {
    let mut workbook = open_workbook_auto(path).map_err(|e| e.to_string())?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| format!("no worksheets in '{}'", path.display()))?;

    workbook.worksheet_range(&sheet).map_err(|e| e.to_string())
}

/// Empty and undefined cells become empty strings; everything else is kept
/// as its textual rendering.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
