mod common;
use common::{bsh, temp_path, today_batch_code, write_sample_csv};
use predicates::prelude::*;
use std::path::Path;

#[test]
fn test_copy_then_paste_round_trips_through_the_clipboard() {
    let src = write_sample_csv("roundtrip");
    let clip = temp_path("roundtrip_clip", "txt");
    let target = temp_path("roundtrip", "xlsx");

    bsh()
        .args(["--clipboard-file", &clip, "copy", &src])
        .assert()
        .success();

    bsh()
        .args(["--clipboard-file", &clip, "paste", &target])
        .assert()
        .success();

    let table = batchsheet::sheet::read_target(Path::new(&target));
    assert_eq!(table.len(), 2);

    let code = today_batch_code();
    for row in table.rows() {
        assert_eq!(row.len(), 8);
        assert_eq!(row[4], code);
    }
    assert_eq!(table.rows()[0][2], "Widget");
    assert_eq!(table.rows()[0][6], "9.99");
    assert_eq!(table.rows()[1][7], "");
}

#[test]
fn test_repeated_pastes_accumulate_rows_in_order() {
    let src = write_sample_csv("accumulate");
    let clip = temp_path("accumulate_clip", "txt");
    let target = temp_path("accumulate", "xlsx");

    bsh()
        .args(["--clipboard-file", &clip, "copy", &src])
        .assert()
        .success();

    for expected_total in ["2 rows total", "4 rows total", "6 rows total"] {
        bsh()
            .args(["--clipboard-file", &clip, "paste", &target])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected_total));
    }

    let table = batchsheet::sheet::read_target(Path::new(&target));
    assert_eq!(table.len(), 6);
    // each paste appended the same two rows after the existing ones
    assert_eq!(table.rows()[0][1], "S1");
    assert_eq!(table.rows()[5][1], "S2");
}

#[test]
fn test_preview_reads_the_source_without_touching_the_clipboard() {
    let src = write_sample_csv("preview_only");
    let clip = temp_path("preview_only_clip", "txt");

    bsh()
        .args(["--clipboard-file", &clip, "preview", &src])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget"))
        .stdout(predicate::str::contains("2 rows"));

    assert!(!Path::new(&clip).exists());
}
