// crates/usecase/src/batch.rs
use std::path::PathBuf;

use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use regscan_domain::reader::{collect_nonzero, decode_lenient};
use regscan_domain::{BatchReport, FileOutcome, FileReport};
use regscan_ports::store::{DumpFileRef, DumpStore};
use regscan_shared_kernel::{ApplicationError, RegisterEntry, Result};

/// Directory and file selection for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPlan {
    pub dir: PathBuf,
    pub pattern: String,
}

pub struct AnalyzeDumps<'a> {
    store: &'a dyn DumpStore,
}

impl<'a> AnalyzeDumps<'a> {
    pub fn new(store: &'a dyn DumpStore) -> Self {
        Self { store }
    }

    /// Analyzes every matching dump in `plan.dir`, in file-name order.
    ///
    /// # Errors
    /// `DirectoryNotFound` and `NoFilesFound` abort before any file is read.
    /// Failures on individual files are recorded in the report instead.
    pub fn run(&self, plan: &AnalysisPlan) -> Result<BatchReport> {
        let files = self.enumerate(plan)?;
        info!("analyzing {} dump file(s) in {}", files.len(), plan.dir.display());

        #[cfg(feature = "parallel")]
        let reports = files.par_iter().map(|f| self.report_file(f)).collect();
        #[cfg(not(feature = "parallel"))]
        let reports = files.iter().map(|f| self.report_file(f)).collect();

        Ok(BatchReport { files: reports })
    }

    /// Nonzero entries of a single dump.
    ///
    /// # Errors
    /// The dump could not be read, or it contains a corrupt values list.
    pub fn analyze_file(&self, file: &DumpFileRef) -> Result<Vec<RegisterEntry>> {
        let bytes = self.store.read_dump(file)?;
        let text = decode_lenient(&bytes);
        collect_nonzero(&text).map_err(|source| {
            ApplicationError::CorruptDump { path: file.path.clone(), source }.into()
        })
    }

    fn enumerate(&self, plan: &AnalysisPlan) -> Result<Vec<DumpFileRef>> {
        if !self.store.path_exists(&plan.dir) {
            return Err(ApplicationError::DirectoryNotFound { path: plan.dir.clone() }.into());
        }

        let mut files = self.store.list_dumps(&plan.dir, &plan.pattern)?;
        if files.is_empty() {
            return Err(ApplicationError::NoFilesFound { path: plan.dir.clone() }.into());
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    fn report_file(&self, file: &DumpFileRef) -> FileReport {
        let outcome = match self.analyze_file(file) {
            Ok(entries) => {
                debug!("{}: {} nonzero entries", file.name, entries.len());
                FileOutcome::Nonzero(entries)
            }
            Err(e) => {
                debug!("{}: {e}", file.name);
                FileOutcome::Failed(e.to_string())
            }
        };
        FileReport::new(file.name.clone(), outcome)
    }
}
