// src/bin/report_stats.rs
use anyhow::Result;
use clap::Parser;
use reportsplit::{
    aggregate::{self, Stat, DEFAULT_COLUMNS},
    logging,
};
use std::path::PathBuf;

/// Print mean and max of the target columns of one data segment.
#[derive(Parser, Debug)]
struct Args {
    /// A `-csv.csv` data segment.
    file: PathBuf,

    /// Columns to summarise; defaults to the broadband pair.
    #[arg(long = "column")]
    columns: Vec<String>,
}

fn main() -> Result<()> {
    logging::init("warn");
    let args = Args::parse();
    let columns = if args.columns.is_empty() {
        DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        args.columns
    };

    let summary = aggregate::summarize(&args.file, &columns)?;
    for col in &summary.columns {
        println!(
            "{:<12} mean={:<20} max={:<20} numeric={} missing={}",
            col.column,
            Stat(col.mean).to_string(),
            Stat(col.max).to_string(),
            col.present,
            col.missing
        );
    }
    Ok(())
}
