// tests/integration/probe.rs
use std::fmt::Write;
use std::path::PathBuf;

use predicates::prelude::*;

use crate::common::{DumpDir, regscan};

const DUMP: &str = "reg_https_flow_pkts_20230101_000000.txt";

/// Register of 100 slots, nonzero where `hits` says so.
fn register_dump(dir: &DumpDir, hits: &[(u64, &str)]) -> PathBuf {
    let mut text = String::from("Ingress.reg_https_flow_pkts\n");
    for index in 0..100u64 {
        let values = hits.iter().find(|(i, _)| *i == index).map_or("0, 0", |(_, v)| *v);
        writeln!(text, "0x{index:08X}         [{values}]").unwrap();
    }
    dir.write(DUMP, &text)
}

#[test]
fn reports_first_nonzero_slot() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[(42, "0, 7")]);

    regscan()
        .arg("probe")
        .arg(&dump)
        .assert()
        .success()
        .stdout("reg_https_flow_pkts HIT: (42, 7)\n");
}

#[test]
fn all_zero_register_has_no_hit() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[]);

    regscan()
        .arg("probe")
        .arg(&dump)
        .assert()
        .success()
        .stdout("reg_https_flow_pkts HIT: None\n");
}

#[test]
fn lowest_index_wins_with_batched_reads() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[(77, "0, 1"), (42, "1, 0")]);

    regscan()
        .args(["probe", "--batch-size", "16"])
        .arg(&dump)
        .assert()
        .success()
        .stdout("reg_https_flow_pkts HIT: (42, 256)\n");
}

#[test]
fn range_bounds_are_honored() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[(42, "0, 7"), (80, "0, 2")]);

    regscan()
        .args(["probe", "--start", "43"])
        .arg(&dump)
        .assert()
        .success()
        .stdout("reg_https_flow_pkts HIT: (80, 2)\n");

    regscan()
        .args(["probe", "--start", "0", "--end", "0x2A"])
        .arg(&dump)
        .assert()
        .success()
        .stdout("reg_https_flow_pkts HIT: None\n");
}

#[test]
fn out_of_byte_range_value_fails_the_run() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[(5, "0, 300")]);

    regscan()
        .arg("probe")
        .arg(&dump)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ambiguous field value at index 5"));
}

#[test]
fn unknown_field_fails_the_run() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[(1, "0, 1")]);

    regscan()
        .args(["probe", "--field", "missing"])
        .arg(&dump)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no field named 'missing'"));
}

#[test]
fn named_field_and_register_override() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[(9, "0, 3")]);

    regscan()
        .args(["probe", "--register", "Ingress.reg", "--field", "Ingress.reg.f1", "--no-hw-sync"])
        .arg(&dump)
        .assert()
        .success()
        .stdout("Ingress.reg HIT: (9, 3)\n");
}

#[test]
fn json_result_carries_index_and_value() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[(42, "0, 7")]);

    let output = regscan().args(["probe", "--format", "json"]).arg(&dump).output().unwrap();
    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["register"], "reg_https_flow_pkts");
    assert_eq!(record["hit"]["index"], 42);
    assert_eq!(record["hit"]["value"], 7);
}

#[test]
fn inverted_range_is_rejected() {
    let dir = DumpDir::new();
    let dump = register_dump(&dir, &[]);

    regscan()
        .args(["probe", "--start", "50", "--end", "10"])
        .arg(&dump)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start 50 must be below --end 10"));
}

#[test]
fn dump_without_data_lines_has_no_hit() {
    let dir = DumpDir::new();
    let dump = dir.write(DUMP, "Ingress.reg_https_flow_pkts\n---------- ----------\n");

    regscan()
        .args(["probe", "--batch-size", "4096"])
        .arg(&dump)
        .assert()
        .success()
        .stdout("reg_https_flow_pkts HIT: None\n");
}
