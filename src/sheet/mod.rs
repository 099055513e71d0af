// src/sheet/mod.rs

mod fs_utils;
mod read;
mod write;

pub use read::{read_source, read_target};
pub use write::write_table;
