// crates/domain/src/pattern.rs
use std::path::Path;

use globset::{Glob, GlobMatcher};

pub const DEFAULT_DUMP_PATTERN: &str = "*.txt";

/// File-name glob selecting dump files inside the output directory.
#[derive(Debug, Clone)]
pub struct DumpPattern {
    original: String,
    matcher: GlobMatcher,
}

impl DumpPattern {
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let glob = Glob::new(pattern)?;
        let matcher = glob.compile_matcher();
        Ok(Self { original: pattern.to_string(), matcher })
    }

    /// Matches the final path component only, like a non-recursive glob.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.matcher.is_match(name))
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}
