use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{aggregate::DEFAULT_COLUMNS, properties::DEFAULT_PROPERTY};

/// Lines in the property block at the top of every report.
pub const DEFAULT_HEADER_LINES: usize = 33;

/// Everything a run needs, passed explicitly into the driver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree of reports: one level of subdirectories holding report files.
    pub input_dir: PathBuf,
    /// Flat directory receiving the split outputs.
    pub output_dir: PathBuf,
    /// Summary text file, overwritten on each saved run.
    pub summary_file: PathBuf,
    pub header_lines: usize,
    pub property: String,
    pub columns: Vec<String>,
    /// Keep display lines and write them to `summary_file`.
    pub save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_root(".")
    }
}

impl Config {
    /// `<root>/data` in, `<root>/out` out, `<root>/output.txt` summary.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input_dir: root.join("data"),
            output_dir: root.join("out"),
            summary_file: root.join("output.txt"),
            header_lines: DEFAULT_HEADER_LINES,
            property: DEFAULT_PROPERTY.to_string(),
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            save: true,
        }
    }

    /// Load a YAML config. Relative paths are taken from the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut cfg: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;

        if let Some(base) = path.parent() {
            for p in [
                &mut cfg.input_dir,
                &mut cfg.output_dir,
                &mut cfg.summary_file,
            ] {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        }
        Ok(cfg)
    }
}
