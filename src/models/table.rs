//! Canonical schema and the in-memory table shaped by it.

use crate::errors::{AppError, AppResult};

pub const COLUMN_COUNT: usize = 8;

/// Fixed column order every table is coerced into. Renaming is positional,
/// not name-matched: whatever headers a source carries, its columns map
/// left-to-right onto these names.
pub const CANONICAL_COLUMNS: [&str; COLUMN_COUNT] = [
    "BarcodeDigits12",
    "StockNo",
    "ItemDescription",
    "SuppCode",
    "BatchDate",
    "Quantity",
    "Price",
    "SuppCodeBatchDate",
];

/// Index of the `BatchDate` field.
pub const BATCH_DATE_COLUMN: usize = 4;

/// Ordered rows of exactly `COLUMN_COUNT` opaque text fields.
/// Values are never coerced to numbers or dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row, enforcing the canonical width.
    pub fn push_row(&mut self, row: Vec<String>) -> AppResult<()> {
        if row.len() != COLUMN_COUNT {
            return Err(AppError::SchemaShape {
                expected: COLUMN_COUNT,
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append every row of `other`, preserving order.
    pub fn extend(&mut self, other: Table) {
        self.rows.extend(other.rows);
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, for previews.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Last `n` rows, for previews.
    pub fn tail(&self, n: usize) -> &[Vec<String>] {
        &self.rows[self.rows.len().saturating_sub(n)..]
    }

    /// Overwrite every row's `BatchDate` field, discarding whatever the
    /// source carried there.
    pub fn stamp_batch_date(&mut self, code: &str) {
        for row in &mut self.rows {
            row[BATCH_DATE_COLUMN] = code.to_string();
        }
    }
}
