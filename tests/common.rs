#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bsh() -> Command {
    cargo_bin_cmd!("batchsheet")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_batchsheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small 2-row source CSV with arbitrary header names.
/// The second row has empty cells in BatchDate and SuppCodeBatchDate.
pub fn write_sample_csv(name: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(
        &path,
        "a,b,c,d,e,f,g,h\n\
         123456789012,S1,Widget,AC,old,4,9.99,AC_old\n\
         123456789013,S2,Gadget,BD,,2,1.50,\n",
    )
    .expect("write sample csv");
    path
}

/// Seed a file-backed clipboard with newline-terminated TSV rows.
pub fn seed_clipboard(name: &str, rows: &[&str]) -> String {
    let clip = temp_path(name, "txt");
    let mut payload = String::new();
    for row in rows {
        payload.push_str(row);
        payload.push('\n');
    }
    fs::write(&clip, payload).expect("seed clipboard file");
    clip
}

/// Expected batch code for today, mirroring the stamping rule.
pub fn today_batch_code() -> String {
    batchsheet::core::batch::current_batch_code()
}
