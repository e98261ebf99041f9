// tests/integration/output_formats.rs
use serde_json::Value;

use crate::common::{DumpDir, regscan};

fn fixture() -> DumpDir {
    let dir = DumpDir::new();
    dir.write("reg_a_20230101_000000.txt", "0x0000000A     [0, 0, 12, 0]\n0x0000000B     [0, 0, 0, 0]\n");
    dir.write("reg_b_20230102_123000.txt", "0x00000001     [1, x]\n");
    dir
}

fn run(dir: &DumpDir, format: &str) -> String {
    let output = regscan().args(["analyze", "--format", format]).arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn json_is_an_array_of_file_objects() {
    let dir = fixture();
    let parsed: Value = serde_json::from_str(&run(&dir, "json")).unwrap();

    let files = parsed.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["file"], "reg_a_20230101_000000.txt");
    assert_eq!(files[0]["counter"], "reg_a");
    assert_eq!(files[0]["entries"], serde_json::json!([{ "index": 10, "values": [0, 0, 12, 0] }]));
    assert_eq!(files[1]["captured_at"], "2023-01-02T12:30:00");
    assert!(files[1]["error"].as_str().unwrap().contains("Corrupt values list"));
}

#[test]
fn jsonl_closes_with_a_total_record() {
    let dir = fixture();
    let text = run(&dir, "jsonl");
    let records: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["type"], "entry");
    assert_eq!(records[0]["index"], 10);
    assert_eq!(records[1]["type"], "file");
    assert_eq!(records[1]["nonzero"], 1);
    assert_eq!(records[3]["type"], "total");
    assert_eq!(records[3]["files"], 2);
    assert_eq!(records[3]["failed"], 1);
}
