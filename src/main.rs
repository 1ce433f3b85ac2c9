use anyhow::Result;
use clap::Parser;
use reportsplit::{config::Config, driver, logging};
use std::path::PathBuf;
use tracing::info;

/// Split measurement reports into property and data files, then summarise
/// the data columns.
#[derive(Parser, Debug)]
#[command(name = "reportsplit", version, about)]
struct Cli {
    /// Project root holding `data/`, `out/` and `output.txt`.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// YAML config file; replaces the layout derived from `--root`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of report subdirectories.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory receiving split outputs.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Summary text file.
    #[arg(long)]
    summary_file: Option<PathBuf>,

    /// Lines in each report's property block.
    #[arg(long)]
    header_lines: Option<usize>,

    /// Header property to report, matched as an exact substring.
    #[arg(long)]
    property: Option<String>,

    /// Print the summary without writing the summary file.
    #[arg(long)]
    no_save: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::from_root(&self.root),
        };
        if let Some(p) = self.input {
            cfg.input_dir = p;
        }
        if let Some(p) = self.output {
            cfg.output_dir = p;
        }
        if let Some(p) = self.summary_file {
            cfg.summary_file = p;
        }
        if let Some(n) = self.header_lines {
            cfg.header_lines = n;
        }
        if let Some(p) = self.property {
            cfg.property = p;
        }
        if self.no_save {
            cfg.save = false;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    logging::init("info");

    let cfg = Cli::parse().into_config()?;
    info!(
        input = %cfg.input_dir.display(),
        output = %cfg.output_dir.display(),
        header_lines = cfg.header_lines,
        "startup"
    );

    let summary = driver::run(&cfg)?;
    info!(lines = summary.lines().len(), "all done");
    Ok(())
}
