//! Batch code computation.

use chrono::{Local, NaiveDate};

/// Month/year code stamped into every copied row's `BatchDate` field.
///
/// The natural code is `MMYY`. A `'0'` is prepended whenever the first
/// character is not already `'0'`, exactly as the legacy rule states, so
/// October through December produce a five-character code. Kept as
/// documented behavior pending product clarification; do not "fix" this
/// into unconditional zero padding.
pub fn batch_code(date: NaiveDate) -> String {
    let mut code = date.format("%m%y").to_string();
    if !code.starts_with('0') {
        code.insert(0, '0');
    }
    code
}

/// Batch code for today's date.
pub fn current_batch_code() -> String {
    batch_code(Local::now().date_naive())
}
