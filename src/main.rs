//! TC 33 Capture Decoder CLI
//!
//! Reads a TC 33 capture file and writes the decoded transactions as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- capture.tc33 > transactions.csv
//! cargo run -- capture.tc33 out/
//! ```
//!
//! With an output directory, writes `total_amount_and_count.csv` and one
//! file per card brand instead.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info`, `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process;
use tc33_capture::{CaptureError, CaptureParser, Report, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(CaptureError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let parsed = CaptureParser::new().parse_reader(reader)?;
    if parsed.is_empty() {
        return Err(CaptureError::NoRecords);
    }

    let report = Report::from_parse_result(&parsed);
    match args.get(2) {
        Some(dir) => {
            report.write_to_dir(Path::new(dir))?;
        }
        None => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            report.write_transactions(handle)?;
        }
    }

    Ok(())
}
