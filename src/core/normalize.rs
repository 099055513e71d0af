// src/core/normalize.rs

use crate::core::batch::current_batch_code;
use crate::errors::AppResult;
use crate::models::Table;
use crate::sheet;
use crate::utils::preview::render_head;
use std::path::Path;

/// Result of loading and normalizing one source file.
pub struct NormalizedSource {
    pub table: Table,
    pub batch_code: String,
    pub preview: String,
    pub status: String,
}

/// Load a source file, coerce it onto the canonical 8-column schema and
/// stamp the current batch code into every row's `BatchDate` field,
/// discarding any batch date the source carried.
///
/// Either a complete valid table comes back or the call fails; no partial
/// result is ever returned.
pub fn normalize(source: &Path, preview_rows: usize) -> AppResult<NormalizedSource> {
    let mut table = sheet::read_source(source)?;

    let batch_code = current_batch_code();
    table.stamp_batch_date(&batch_code);

    let preview = render_head(&table, preview_rows);
    let status = format!(
        "Loaded {} rows from '{}', BatchDate: {}",
        table.len(),
        source.display(),
        batch_code
    );

    Ok(NormalizedSource {
        table,
        batch_code,
        preview,
        status,
    })
}
