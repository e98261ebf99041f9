// src/config.rs
use crate::args::{AnalyzeArgs, CaptureArgs, ProbeArgs};
use crate::error::AppError;
use derive_builder::Builder;
use regscan_domain::ReportFormat;
use regscan_domain::pattern::DEFAULT_DUMP_PATTERN;
use regscan_shared_kernel::DumpName;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError", validate = "Self::validate"))]
pub struct AnalyzeConfig {
    pub dir: PathBuf,
    #[builder(default = "DEFAULT_DUMP_PATTERN.to_string()")]
    pub pattern: String,
    #[builder(default)]
    pub format: ReportFormat,
}

impl AnalyzeConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.pattern {
            Some(p) if p.trim().is_empty() => Err("dump pattern must not be empty".into()),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError", validate = "Self::validate"))]
pub struct ProbeConfig {
    pub dump: PathBuf,
    pub register: String,
    #[builder(default)]
    pub field: Option<String>,
    #[builder(default)]
    pub start: u64,
    #[builder(default)]
    pub end: Option<u64>,
    #[builder(default = "1")]
    pub batch_size: u64,
    #[builder(default = "true")]
    pub hw_sync: bool,
    #[builder(default)]
    pub format: ReportFormat,
}

impl ProbeConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let (Some(start), Some(Some(end))) = (self.start, self.end)
            && start >= end
        {
            return Err(format!("--start {start} must be below --end {end}"));
        }
        if self.batch_size == Some(0) {
            return Err("--batch-size must be greater than 0".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError", validate = "Self::validate"))]
pub struct CaptureConfig {
    /// Register name → dump replayed for it.
    pub sources: Vec<(String, PathBuf)>,
    pub out_dir: PathBuf,
    #[builder(default = "true")]
    pub hw_sync: bool,
    #[builder(default = "true")]
    pub tabular: bool,
}

impl CaptureConfigBuilder {
    /// Each register is written to `<register>_<timestamp>.txt`, so two
    /// sources with the same counter name would overwrite each other.
    fn validate(&self) -> Result<(), String> {
        let Some(sources) = &self.sources else {
            return Ok(());
        };
        let mut seen = HashSet::new();
        for (register, path) in sources {
            if !seen.insert(register.as_str()) {
                return Err(format!(
                    "register '{register}' is given more than once (again by {})",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Counter name encoded in a dump's file name.
pub fn register_from_dump(path: &Path) -> String {
    let file_name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    DumpName::parse(&file_name).counter
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = AppError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        AnalyzeConfigBuilder::default()
            .dir(args.dir)
            .pattern(args.pattern)
            .format(ReportFormat::from(args.format))
            .build()
    }
}

impl TryFrom<ProbeArgs> for ProbeConfig {
    type Error = AppError;

    fn try_from(args: ProbeArgs) -> Result<Self, Self::Error> {
        let register = args.register.unwrap_or_else(|| register_from_dump(&args.dump));
        ProbeConfigBuilder::default()
            .dump(args.dump)
            .register(register)
            .field(args.field)
            .start(args.start)
            .end(args.end)
            .batch_size(args.batch_size)
            .hw_sync(!args.no_hw_sync)
            .format(ReportFormat::from(args.format))
            .build()
    }
}

impl TryFrom<CaptureArgs> for CaptureConfig {
    type Error = AppError;

    fn try_from(args: CaptureArgs) -> Result<Self, Self::Error> {
        let sources: Vec<_> = args.dumps.into_iter().map(|p| (register_from_dump(&p), p)).collect();
        CaptureConfigBuilder::default()
            .sources(sources)
            .out_dir(args.out_dir)
            .hw_sync(!args.no_hw_sync)
            .tabular(!args.plain)
            .build()
    }
}
