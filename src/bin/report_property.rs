// src/bin/report_property.rs
use anyhow::Result;
use clap::Parser;
use reportsplit::{logging, properties, text::strip_line_ending};
use std::{path::PathBuf, process::ExitCode};

/// Look up one property in a header segment.
#[derive(Parser, Debug)]
struct Args {
    /// A `-properties.csv` header segment, or a whole report.
    file: PathBuf,

    #[arg(long, default_value = properties::DEFAULT_PROPERTY)]
    property: String,
}

fn main() -> Result<ExitCode> {
    logging::init("warn");
    let args = Args::parse();

    match properties::read_property(&args.file, &args.property)? {
        Some(value) => {
            println!("{}", strip_line_ending(&value));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{:?} not found in {}", args.property, args.file.display());
            Ok(ExitCode::FAILURE)
        }
    }
}
