// src/split/mod.rs
use anyhow::{anyhow, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument};

use crate::{
    text::{read_latin1, write_latin1},
    ReportError,
};

pub mod naming;
pub mod segment;

pub use segment::{partition, DataSegment, HeaderSegment, SplitReport};

/// Where [`split_report`] wrote its two halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutputs {
    pub properties: PathBuf,
    pub data: PathBuf,
}

/// Read the report at `path` and partition it, failing with
/// [`ReportError::TooShort`] when it cannot fill the header block.
pub fn load_report(path: &Path, header_lines: usize) -> Result<SplitReport> {
    let text = read_latin1(path)?;
    partition(&text, header_lines).map_err(|lines| {
        ReportError::TooShort {
            path: path.to_path_buf(),
            lines,
            needed: header_lines,
        }
        .into()
    })
}

/// Split one report into `<stem>-properties.csv` and `<stem>-csv.csv` under
/// `out_dir`. Existing outputs are overwritten; nothing is written when the
/// report is too short.
#[instrument(level = "info", skip(path, out_dir), fields(path = %path.as_ref().display()))]
pub fn split_report<P: AsRef<Path>, Q: AsRef<Path>>(
    path: P,
    out_dir: Q,
    header_lines: usize,
) -> Result<SplitOutputs> {
    let path = path.as_ref();
    let out_dir = out_dir.as_ref();

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("report path has no usable file name: {:?}", path))?;

    let report = load_report(path, header_lines)?;
    debug!(
        header = report.header.lines.len(),
        data = report.data.lines.len(),
        "partitioned report"
    );

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let (properties, data) = naming::output_paths(file_name, out_dir);
    write_latin1(&properties, &report.header.text())?;
    write_latin1(&data, &report.data.text())?;

    info!(properties = %properties.display(), data = %data.display(), "split written");
    Ok(SplitOutputs { properties, data })
}
