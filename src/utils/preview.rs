//! Plain-text preview rendering for copied and pasted rows.
//! Headerless on purpose, matching what actually lands in the clipboard
//! and in the target spreadsheet.

use crate::models::Table;
use unicode_width::UnicodeWidthStr;

/// First `n` rows, column-aligned.
pub fn render_head(table: &Table, n: usize) -> String {
    render_rows(table.head(n))
}

/// Last `n` rows, column-aligned.
pub fn render_tail(table: &Table, n: usize) -> String {
    render_rows(table.tail(n))
}

fn render_rows(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(no rows)".to_string();
    }

    let columns = rows[0].len();
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    let mut out = String::new();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            let pad = widths[i].saturating_sub(UnicodeWidthStr::width(value.as_str()));
            out.push_str(value);
            out.push_str(&" ".repeat(pad));
        }
        // trailing pad spaces are harmless; the newline closes the row
        out.push('\n');
    }
    out
}
