// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "regscan",
    version,
    about = "Report nonzero counters in register dumps and probe registers for the first hit"
)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report nonzero entries of every dump file in a directory
    Analyze(AnalyzeArgs),
    /// Scan a register for the first nonzero slot
    Probe(ProbeArgs),
    /// Write timestamped dumps of registers
    Capture(CaptureArgs),
}

#[derive(ClapArgs, Debug)]
pub struct AnalyzeArgs {
    /// Directory holding `<counter>_<YYYYMMDD_HHMMSS>.txt` dumps
    #[arg(
        value_hint = ValueHint::DirPath,
        env = "REGSCAN_OUT_DIR",
        default_value = "out",
        help_heading = "Input"
    )]
    pub dir: PathBuf,

    /// File-name glob selecting dumps
    #[arg(long, default_value = "*.txt", help_heading = "Input")]
    pub pattern: String,

    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct ProbeArgs {
    /// Dump replayed as the device's register contents
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Device")]
    pub dump: PathBuf,

    /// Register name; defaults to the counter name encoded in the dump file name
    #[arg(long, help_heading = "Device")]
    pub register: Option<String>,

    /// Field to decode; the slot's first field when omitted
    #[arg(long, help_heading = "Device")]
    pub field: Option<String>,

    /// First index to scan (decimal or 0x-hex)
    #[arg(long, default_value = "0", value_parser = parsers::parse_index, help_heading = "Range")]
    pub start: u64,

    /// Exclusive end index; the register size when omitted
    #[arg(long, value_parser = parsers::parse_index, help_heading = "Range")]
    pub end: Option<u64>,

    /// Slots fetched per device read
    #[arg(long, default_value = "1", value_parser = parsers::parse_positive_u64, help_heading = "Range")]
    pub batch_size: u64,

    /// Read the runtime's cached copy instead of forcing a hardware read
    #[arg(long, help_heading = "Device")]
    pub no_hw_sync: bool,

    /// Result format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct CaptureArgs {
    /// Dumps replayed as device registers, one register per file
    #[arg(required = true, value_hint = ValueHint::FilePath, help_heading = "Device")]
    pub dumps: Vec<PathBuf>,

    /// Directory receiving the new dumps (created when missing)
    #[arg(long, value_hint = ValueHint::DirPath, env = "REGSCAN_OUT_DIR", default_value = "out", help_heading = "Output")]
    pub out_dir: PathBuf,

    /// Simulate a runtime without hardware-synchronized dumps
    #[arg(long, help_heading = "Device")]
    pub no_hw_sync: bool,

    /// Write bare data lines without the tabular header
    #[arg(long, help_heading = "Output")]
    pub plain: bool,
}
