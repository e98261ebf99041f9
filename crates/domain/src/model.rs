// crates/domain/src/model.rs
use regscan_shared_kernel::{DumpName, RegisterEntry};

/// What analysis produced for one dump file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Nonzero entries in source order; empty when every counter is zero.
    Nonzero(Vec<RegisterEntry>),
    /// The file could not be read or contained a corrupt values list.
    Failed(String),
}

/// One block of the batch report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub dump: DumpName,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(file: impl Into<String>, outcome: FileOutcome) -> Self {
        let file = file.into();
        let dump = DumpName::parse(&file);
        Self { file, dump, outcome }
    }

    pub fn entries(&self) -> &[RegisterEntry] {
        match &self.outcome {
            FileOutcome::Nonzero(entries) => entries,
            FileOutcome::Failed(_) => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed(_))
    }
}

/// Reports for every dump in a directory, in sorted file-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn nonzero_entries(&self) -> usize {
        self.files.iter().map(|f| f.entries().len()).sum()
    }

    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| f.is_failed()).count()
    }
}
