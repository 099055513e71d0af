// src/core/transfer.rs

use crate::clipboard::Clipboard;
use crate::errors::{AppError, AppResult};
use crate::models::{COLUMN_COUNT, Table};
use crate::sheet;
use crate::utils::preview::{render_head, render_tail};
use std::path::Path;

/// Result of one merge-and-rewrite operation on the target spreadsheet.
pub struct MergeOutcome {
    pub table: Table,
    pub preview: String,
    pub status: String,
}

/// Serialize the table as headerless tab-separated text and place it on
/// the clipboard, replacing whatever was there. Returns the preview of the
/// copied rows.
pub fn serialize_to_clipboard(
    table: &Table,
    clipboard: &mut dyn Clipboard,
    preview_rows: usize,
) -> AppResult<String> {
    clipboard.write_text(&to_tab_separated(table))?;
    Ok(render_head(table, preview_rows))
}

/// Read tab-separated rows from the clipboard and append them to the
/// target spreadsheet, rewriting the file in full.
///
/// A missing, corrupt or wrong-shape target starts out empty, so pasting
/// into a fresh path bootstraps the file. The rewrite goes through a temp
/// file and a rename; a failed write leaves the previous target intact.
pub fn merge_from_clipboard(
    target: &Path,
    clipboard: &mut dyn Clipboard,
    preview_rows: usize,
) -> AppResult<MergeOutcome> {
    let text = clipboard.read_text()?;
    let incoming = parse_clipboard(&text)?;

    let mut combined = sheet::read_target(target);
    let appended = incoming.len();
    combined.extend(incoming);

    sheet::write_table(target, &combined)?;

    let preview = render_tail(&combined, preview_rows);
    let status = format!(
        "Appended {appended} rows to '{}' ({} rows total)",
        target.display(),
        combined.len()
    );

    Ok(MergeOutcome {
        table: combined,
        preview,
        status,
    })
}

/// Tab-separated fields, newline-terminated lines, no header row and no
/// quoting. Fields containing tabs or newlines will not survive the round
/// trip; that precondition is the caller's to uphold.
pub fn to_tab_separated(table: &Table) -> String {
    let mut out = String::new();
    for row in table.rows() {
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

/// Parse clipboard text under the canonical schema (no header row
/// expected). Every line must split into exactly eight fields.
pub fn parse_clipboard(text: &str) -> AppResult<Table> {
    if text.trim().is_empty() {
        return Err(AppError::ClipboardRead("clipboard is empty".to_string()));
    }

    let body = text.strip_suffix('\n').unwrap_or(text);

    let mut table = Table::new();
    for (index, line) in body.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);

        let fields: Vec<String> = line.split('\t').map(str::to_string).collect();
        if fields.len() != COLUMN_COUNT {
            return Err(AppError::MalformedClipboardData {
                line: index + 1,
                expected: COLUMN_COUNT,
                found: fields.len(),
            });
        }
        table.push_row(fields)?;
    }

    Ok(table)
}
