// tests/common/mod.rs
//! Shared fixtures for binary tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn regscan() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_regscan"));
    cmd.env_remove("REGSCAN_OUT_DIR").env_remove("RUST_LOG");
    cmd
}

/// Temporary output directory populated with dump files.
pub struct DumpDir {
    dir: TempDir,
}

impl DumpDir {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

pub fn rule() -> String {
    "=".repeat(60)
}

/// Expected text block for one file.
pub fn block(file: &str, body: &[&str]) -> String {
    let mut out = format!("\n{rule}\nFILE: {file}\n{rule}\n", rule = rule());
    for line in body {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
