// src/app.rs
use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Local;
use log::debug;
use regscan_infra::{FsDumpStore, ReplayDevice};
use regscan_ports::device::ReadMode;
use regscan_shared_kernel::{ApplicationError, RegscanError};
use regscan_usecase::{AnalysisPlan, AnalyzeDumps, CaptureDumps, CapturePlan, ProbePlan, ProbeRegister};

use crate::args::Command;
use crate::config::{AnalyzeConfig, CaptureConfig, ProbeConfig};
use crate::error::Result;
use crate::presentation;

pub fn run(command: Command) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match command {
        Command::Analyze(args) => analyze(&AnalyzeConfig::try_from(args)?, &mut out)?,
        Command::Probe(args) => probe(&ProbeConfig::try_from(args)?, &mut out)?,
        Command::Capture(args) => capture(&CaptureConfig::try_from(args)?, &mut out)?,
    };
    out.flush()?;
    Ok(code)
}

/// Prints the batch report. A missing directory or an empty one prints a
/// single message and still succeeds.
pub fn analyze(config: &AnalyzeConfig, out: &mut dyn Write) -> Result<ExitCode> {
    let store = FsDumpStore::new();
    let plan = AnalysisPlan { dir: config.dir.clone(), pattern: config.pattern.clone() };

    let err = match AnalyzeDumps::new(&store).run(&plan) {
        Ok(batch) => {
            debug!("{} file(s), {} nonzero entries", batch.files.len(), batch.nonzero_entries());
            presentation::write_batch(out, &batch, config.format)?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => e,
    };

    if let RegscanError::Application(app) = err.root() {
        match app {
            ApplicationError::DirectoryNotFound { path } => {
                presentation::write_missing_dir(out, path)?;
                return Ok(ExitCode::SUCCESS);
            }
            ApplicationError::NoFilesFound { .. } => {
                presentation::write_no_files(out)?;
                return Ok(ExitCode::SUCCESS);
            }
            _ => {}
        }
    }
    Err(err.into())
}

pub fn probe(config: &ProbeConfig, out: &mut dyn Write) -> Result<ExitCode> {
    let device = ReplayDevice::new().load(config.register.clone(), &config.dump)?;
    let plan = ProbePlan {
        register: config.register.clone(),
        field: config.field.clone(),
        start: config.start,
        end: config.end,
        mode: ReadMode::from_hw(config.hw_sync),
        batch_size: config.batch_size,
    };

    let hit = ProbeRegister::new(&device).run(&plan)?;
    presentation::write_probe(out, &config.register, hit, config.format)?;
    Ok(ExitCode::SUCCESS)
}

pub fn capture(config: &CaptureConfig, out: &mut dyn Write) -> Result<ExitCode> {
    let mut device = ReplayDevice::new();
    if !config.hw_sync {
        device = device.without_hardware_sync();
    }
    for (register, path) in &config.sources {
        device = device.load(register.clone(), path)?;
    }

    let store = FsDumpStore::new();
    let plan = CapturePlan {
        registers: config.sources.iter().map(|(register, _)| register.clone()).collect(),
        out_dir: config.out_dir.clone(),
        captured_at: Local::now().naive_local(),
        tabular: config.tabular,
    };

    let paths = CaptureDumps::new(&device, &store).run(&plan)?;
    presentation::write_saved(out, &paths, &config.out_dir)?;
    Ok(ExitCode::SUCCESS)
}
