//! tailwatch CLI - follow files and print appended data
//!
//! Usage: tailwatch [OPTIONS] <FILES>...
//!
//! Each file is polled on its own thread; appended data is printed as it
//! arrives, truncation and in-place modification are reported to stderr and
//! the new content printed in full. Runs until Ctrl+C.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use tailwatch::{follow_files, Encoding, FollowOptions, OutputSink, PROGRAM_NAME};

/// Exit code when any warning or error was reported.
const EXIT_ERROR: u8 = 1;
/// Exit code after Ctrl+C, matching shell convention (128 + SIGINT).
const EXIT_INTERRUPT: u8 = 130;

/// tailwatch - output appended data as files grow
#[derive(Parser, Debug)]
#[command(name = "tailwatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to follow
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Seconds to wait between polls of each file
    #[arg(short = 's', long, value_name = "SECS", default_value_t = 0.5)]
    interval: f64,

    /// Use ISO-8859-1 instead of UTF-8 when reading files
    #[arg(long)]
    iso: bool,

    /// Suppress the file name header on output
    #[arg(short = 'H', long)]
    no_file_header: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}: {}", PROGRAM_NAME, err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if !cli.interval.is_finite() || cli.interval <= 0.0 {
        bail!("invalid polling interval: {}", cli.interval);
    }

    let options = FollowOptions {
        encoding: if cli.iso { Encoding::Latin1 } else { Encoding::Utf8 },
        interval: Duration::from_secs_f64(cli.interval),
    };

    // Headers only when following more than one file, unless suppressed.
    let headers = cli.files.len() > 1 && !cli.no_file_header;
    let sink = Arc::new(OutputSink::stdio(headers));

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    follow_files(cli.files, options, Arc::clone(&sink), Arc::clone(&running));

    // Let buffered output drain before reporting the exit status.
    sink.flush();

    if !running.load(Ordering::SeqCst) {
        return Ok(ExitCode::from(EXIT_INTERRUPT));
    }
    if sink.had_warnings() {
        Ok(ExitCode::from(EXIT_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
