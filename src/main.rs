// src/main.rs
use clap::Parser;
use regscan::app;
use regscan::args::Args;
use std::process::ExitCode;

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(args.verbose)))
        .target(env_logger::Target::Stderr)
        .init();

    match try_main(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<ExitCode> {
    let code = app::run(args.command)?;
    Ok(code)
}
