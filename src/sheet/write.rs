// src/sheet/write.rs

use crate::errors::{AppError, AppResult};
use crate::models::Table;
use crate::sheet::fs_utils::replace_file;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Rewrite the target spreadsheet in full: first sheet, no header row,
/// every cell written as text. Every call reprocesses the whole table;
/// there is no incremental append.
pub fn write_table(path: &Path, table: &Table) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in table.rows().iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write(row_index as u32, col as u16, value.as_str())
                .map_err(|e| AppError::TargetWrite(e.to_string()))?;
        }
    }

    replace_file(path, |tmp| {
        workbook
            .save(tmp)
            .map_err(|e| AppError::TargetWrite(e.to_string()))
    })
}
