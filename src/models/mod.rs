pub mod table;

pub use table::{BATCH_DATE_COLUMN, CANONICAL_COLUMNS, COLUMN_COUNT, Table};
