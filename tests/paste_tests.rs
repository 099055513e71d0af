mod common;
use common::{bsh, seed_clipboard, temp_path};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const ROW_A: &str = "111111111111\tS1\tWidget\tAC\t0324\t4\t9.99\tAC_0324";
const ROW_B: &str = "222222222222\tS2\tGadget\tBD\t0324\t2\t1.50\tBD_0324";

#[test]
fn test_paste_bootstraps_a_missing_target() {
    let clip = seed_clipboard("paste_boot_clip", &[ROW_A, ROW_B]);
    let target = temp_path("paste_boot", "xlsx");

    bsh()
        .args(["--clipboard-file", &clip, "paste", &target])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows total"));

    let table = batchsheet::sheet::read_target(Path::new(&target));
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0][0], "111111111111");
    assert_eq!(table.rows()[1][1], "S2");
}

#[test]
fn test_paste_appends_after_existing_rows() {
    let target = temp_path("paste_append", "xlsx");

    let clip_b = seed_clipboard("paste_append_clip_b", &[ROW_B]);
    bsh()
        .args(["--clipboard-file", &clip_b, "paste", &target])
        .assert()
        .success();

    let clip_a = seed_clipboard("paste_append_clip_a", &[ROW_A]);
    bsh()
        .args(["--clipboard-file", &clip_a, "paste", &target])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows total"));

    let table = batchsheet::sheet::read_target(Path::new(&target));
    assert_eq!(table.len(), 2);
    // existing rows first, pasted rows after
    assert_eq!(table.rows()[0][0], "222222222222");
    assert_eq!(table.rows()[1][0], "111111111111");
}

#[test]
fn test_paste_treats_a_corrupt_target_as_empty() {
    let target = temp_path("paste_corrupt", "xlsx");
    fs::write(&target, b"not a workbook").expect("write corrupt target");

    let clip = seed_clipboard("paste_corrupt_clip", &[ROW_A]);
    bsh()
        .args(["--clipboard-file", &clip, "paste", &target])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 rows total"));

    let table = batchsheet::sheet::read_target(Path::new(&target));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_paste_rejects_malformed_clipboard_rows() {
    let clip = seed_clipboard("paste_malformed_clip", &["just\tthree\tfields"]);
    let target = temp_path("paste_malformed", "xlsx");

    bsh()
        .args(["--clipboard-file", &clip, "paste", &target])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed clipboard data"));

    assert!(!Path::new(&target).exists());
}

#[test]
fn test_paste_fails_on_an_empty_clipboard() {
    let clip = temp_path("paste_empty_clip", "txt");
    fs::write(&clip, "").expect("write empty clipboard file");
    let target = temp_path("paste_empty", "xlsx");

    bsh()
        .args(["--clipboard-file", &clip, "paste", &target])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Clipboard read error"));
}
