// crates/ports/src/store.rs
use std::path::{Path, PathBuf};

use regscan_shared_kernel::Result;
use serde::Serialize;

/// A dump file discovered in the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpFileRef {
    pub path: PathBuf,
    pub name: String,
}

impl DumpFileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        Self { path, name }
    }
}

/// Port for locating and reading register dumps.
pub trait DumpStore: Send + Sync {
    /// True when `dir` exists at all; a non-directory then lists no dumps.
    fn path_exists(&self, dir: &Path) -> bool;

    /// Dump files directly inside `dir` whose name matches `pattern`. Order is
    /// unspecified; callers sort.
    fn list_dumps(&self, dir: &Path, pattern: &str) -> Result<Vec<DumpFileRef>>;

    fn read_dump(&self, file: &DumpFileRef) -> Result<Vec<u8>>;

    /// Writes a complete dump as `dir/file_name`, creating `dir` when missing.
    fn write_dump(&self, dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf>;
}
