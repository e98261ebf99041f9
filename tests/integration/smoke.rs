// tests/integration/smoke.rs
use predicates::prelude::*;

use crate::common::regscan;

#[test]
fn shows_help() {
    regscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("probe"))
        .stdout(predicate::str::contains("capture"));
}

#[test]
fn shows_version() {
    regscan().arg("--version").assert().success().stdout(predicate::str::contains(regscan::VERSION));
}

#[test]
fn rejects_zero_batch_size() {
    regscan()
        .args(["probe", "dump.txt", "--batch-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
}

#[test]
fn capture_requires_a_source() {
    regscan().arg("capture").assert().failure();
}
