// src/presentation.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use regscan_domain::report::render_batch;
use regscan_domain::{BatchReport, FileOutcome, FileReport, ProbeHit, ReportFormat};
use regscan_shared_kernel::CounterValue;
use serde::Serialize;

#[derive(Serialize)]
struct EntryRecord<'a> {
    index: u64,
    values: &'a [CounterValue],
}

#[derive(Serialize)]
struct FileRecord<'a> {
    file: &'a str,
    counter: &'a str,
    captured_at: Option<NaiveDateTime>,
    entries: Vec<EntryRecord<'a>>,
    error: Option<&'a str>,
}

impl<'a> From<&'a FileReport> for FileRecord<'a> {
    fn from(report: &'a FileReport) -> Self {
        let error = match &report.outcome {
            FileOutcome::Failed(message) => Some(message.as_str()),
            FileOutcome::Nonzero(_) => None,
        };
        Self {
            file: &report.file,
            counter: &report.dump.counter,
            captured_at: report.dump.captured_at,
            entries: report
                .entries()
                .iter()
                .map(|e| EntryRecord { index: e.index, values: &e.values })
                .collect(),
            error,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonlRecord<'a> {
    Entry {
        file: &'a str,
        index: u64,
        values: &'a [CounterValue],
    },
    File {
        file: &'a str,
        counter: &'a str,
        captured_at: Option<NaiveDateTime>,
        nonzero: usize,
        error: Option<&'a str>,
    },
    Total {
        version: &'static str,
        files: usize,
        nonzero: usize,
        failed: usize,
    },
}

#[derive(Serialize)]
struct ProbeRecord<'a> {
    register: &'a str,
    hit: Option<ProbeHit>,
}

pub fn write_batch(out: &mut dyn Write, batch: &BatchReport, format: ReportFormat) -> io::Result<()> {
    match format {
        ReportFormat::Text => out.write_all(render_batch(batch).as_bytes()),
        ReportFormat::Json => write_json(out, batch),
        ReportFormat::Jsonl => write_jsonl(out, batch),
    }
}

fn write_json(out: &mut dyn Write, batch: &BatchReport) -> io::Result<()> {
    let records: Vec<FileRecord<'_>> = batch.files.iter().map(FileRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

fn write_jsonl(out: &mut dyn Write, batch: &BatchReport) -> io::Result<()> {
    for report in &batch.files {
        for entry in report.entries() {
            let record = JsonlRecord::Entry { file: &report.file, index: entry.index, values: &entry.values };
            write_line(out, &record)?;
        }
    }

    for report in &batch.files {
        let record = FileRecord::from(report);
        write_line(
            out,
            &JsonlRecord::File {
                file: record.file,
                counter: record.counter,
                captured_at: record.captured_at,
                nonzero: record.entries.len(),
                error: record.error,
            },
        )?;
    }

    write_line(
        out,
        &JsonlRecord::Total {
            version: crate::VERSION,
            files: batch.files.len(),
            nonzero: batch.nonzero_entries(),
            failed: batch.failures(),
        },
    )
}

fn write_line<T: Serialize>(out: &mut dyn Write, record: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)
}

/// Message printed when the output directory is missing.
pub fn write_missing_dir(out: &mut dyn Write, dir: &Path) -> io::Result<()> {
    writeln!(out, "ERROR: {} does not exist", dir.display())
}

pub fn write_no_files(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "No register dump files found")
}

pub fn write_probe(
    out: &mut dyn Write,
    register: &str,
    hit: Option<ProbeHit>,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => match hit {
            Some(ProbeHit { index, value }) => writeln!(out, "{register} HIT: ({index}, {value})"),
            None => writeln!(out, "{register} HIT: None"),
        },
        ReportFormat::Json | ReportFormat::Jsonl => write_line(out, &ProbeRecord { register, hit }),
    }
}

pub fn write_saved(out: &mut dyn Write, paths: &[PathBuf], out_dir: &Path) -> io::Result<()> {
    for path in paths {
        writeln!(out, "Saved: {}", path.display())?;
    }
    writeln!(out, "Output folder: {}", out_dir.display())
}
