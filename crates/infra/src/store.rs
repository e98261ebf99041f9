// crates/infra/src/store.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;
use regscan_domain::DumpPattern;
use regscan_ports::store::{DumpFileRef, DumpStore};
use regscan_shared_kernel::{InfrastructureError, Result};

/// Filesystem adapter implementing the `DumpStore` port.
#[derive(Debug, Default)]
pub struct FsDumpStore;

impl FsDumpStore {
    pub fn new() -> Self {
        Self
    }
}

impl DumpStore for FsDumpStore {
    fn path_exists(&self, dir: &Path) -> bool {
        dir.exists()
    }

    fn list_dumps(&self, dir: &Path, pattern: &str) -> Result<Vec<DumpFileRef>> {
        let pattern = DumpPattern::new(pattern).map_err(|e| InfrastructureError::InvalidPattern {
            pattern: pattern.to_string(),
            details: e.to_string(),
        })?;
        if !dir.is_dir() {
            debug!("{} is not a directory, no dumps to list", dir.display());
            return Ok(Vec::new());
        }
        let read_dir = |source| InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir)? {
            let entry = entry.map_err(read_dir)?;
            let path = entry.path();
            // Directories named like dumps are not dumps.
            if !path.is_file() || !pattern.matches_path(&path) {
                continue;
            }
            files.push(DumpFileRef::new(path));
        }
        debug!("{} file(s) in {} match {}", files.len(), dir.display(), pattern.pattern());
        Ok(files)
    }

    fn read_dump(&self, file: &DumpFileRef) -> Result<Vec<u8>> {
        fs::read(&file.path)
            .map_err(|source| InfrastructureError::FileUnreadable { path: file.path.clone(), source }.into())
    }

    fn write_dump(&self, dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = dir.join(file_name);
        let write_err = |source| InfrastructureError::FileWrite { path: path.clone(), source };
        fs::create_dir_all(dir).map_err(write_err)?;
        atomic_write(&path, contents).map_err(write_err)?;
        Ok(path)
    }
}

/// Writes via a temp file in the same directory and renames it into place, so
/// a reader never sees a half-written dump.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let result = write_then_rename(&tmp, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_then_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(tmp)?);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    drop(w);

    fs::rename(tmp, path)
}
