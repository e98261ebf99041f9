// tests/integration/analyze.rs
use predicates::prelude::*;

use crate::common::{DumpDir, block, regscan};

fn analyze(dir: &DumpDir) -> String {
    let output = regscan().arg("analyze").arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn all_zero_dump_reports_all_zero() {
    let dir = DumpDir::new();
    dir.write("reg_a_20230101_000000.txt", "0x00000000     [0, 0, 0]\n");

    assert_eq!(analyze(&dir), block("reg_a_20230101_000000.txt", &["(all zero)"]));
}

#[test]
fn only_nonzero_entries_are_listed() {
    let dir = DumpDir::new();
    dir.write(
        "reg_b_20230101_000000.txt",
        "Register: Ingress.reg_b\n0x0000000A     [0, 0, 12, 0]\n0x0000000B     [0, 0, 0, 0]\n",
    );

    assert_eq!(analyze(&dir), block("reg_b_20230101_000000.txt", &["[10] = [0, 0, 12, 0]"]));
}

#[test]
fn directory_without_dumps_prints_single_message() {
    let dir = DumpDir::new();
    dir.write("notes.md", "0x00000001     [1]\n");

    regscan()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("No register dump files found\n");
}

#[test]
fn missing_directory_is_reported_and_not_fatal() {
    let dir = DumpDir::new();
    let missing = dir.path().join("out");

    regscan()
        .arg("analyze")
        .arg(&missing)
        .assert()
        .success()
        .stdout(format!("ERROR: {} does not exist\n", missing.display()));
}

#[test]
fn files_are_reported_in_name_order() {
    let dir = DumpDir::new();
    dir.write("a_20230102_000000.txt", "0x00000001     [2]\n");
    dir.write("a_20230101_000000.txt", "0x00000001     [1]\n");

    let out = analyze(&dir);
    let first = out.find("FILE: a_20230101_000000.txt").unwrap();
    let second = out.find("FILE: a_20230102_000000.txt").unwrap();
    assert!(first < second);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = DumpDir::new();
    for (name, body) in [
        ("reg_c_20230101_000000.txt", "0x00000003     [0, 9]\n"),
        ("reg_a_20230101_000000.txt", "0x00000000     [0]\n"),
        ("reg_b_20230101_000000.txt", "0x000000FF     [1, 1]\n"),
    ] {
        dir.write(name, body);
    }

    assert_eq!(analyze(&dir), analyze(&dir));
}

#[test]
fn corrupt_file_is_reported_inline_and_others_continue() {
    let dir = DumpDir::new();
    dir.write("reg_a_20230101_000000.txt", "0x00000000     [0]\n0x00000001     [1, foo, 3]\n");
    dir.write("reg_b_20230101_000000.txt", "0x00000002     [4]\n");

    regscan()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE: reg_a_20230101_000000.txt"))
        .stdout(predicate::str::contains("  ERROR: "))
        .stdout(predicate::str::contains("Corrupt values list on line 2"))
        .stdout(predicate::str::contains("  [2] = [4]"));
}

#[test]
fn invalid_utf8_bytes_are_dropped() {
    let dir = DumpDir::new();
    dir.write_bytes("reg_a_20230101_000000.txt", b"\xff\xfeheader\n0x00000007     [3]\xff\n");

    assert_eq!(analyze(&dir), block("reg_a_20230101_000000.txt", &["[7] = [3]"]));
}

#[test]
fn directory_defaults_to_environment() {
    let dir = DumpDir::new();
    dir.write("reg_a_20230101_000000.txt", "0x00000001     [1]\n");

    regscan()
        .env("REGSCAN_OUT_DIR", dir.path())
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("  [1] = [1]"));
}

#[test]
fn custom_pattern_selects_files() {
    let dir = DumpDir::new();
    dir.write("reg_a_20230101_000000.txt", "0x00000001     [1]\n");
    dir.write("reg_a_20230101_000000.dump", "0x00000002     [2]\n");

    regscan()
        .args(["analyze", "--pattern", "*.dump"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE: reg_a_20230101_000000.dump"))
        .stdout(predicate::str::contains(".txt").not());
}

#[test]
fn regular_file_in_place_of_directory_has_no_dumps() {
    let dir = DumpDir::new();
    let file = dir.write("out", "0x00000001     [1]\n");

    regscan()
        .arg("analyze")
        .arg(&file)
        .assert()
        .success()
        .stdout("No register dump files found\n");
}
