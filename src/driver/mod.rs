// src/driver/mod.rs
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    aggregate::{self, Stat},
    config::Config,
    properties,
    split::{
        self,
        naming::{display_name, DATA_MARKER, PROPERTIES_MARKER},
        SplitOutputs,
    },
    text::strip_line_ending,
    ReportError,
};

pub mod summary;

pub use summary::Summary;

/// Entries of `dir` sorted by path, or `None` (after telling the user)
/// when the directory is missing.
fn sorted_entries(dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    if !dir.exists() {
        let err = ReportError::DirectoryNotFound(dir.to_path_buf());
        warn!(path = %dir.display(), "directory missing, skipping");
        println!("{err}");
        return Ok(None);
    }
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("listing {}", dir.display()))?;
    entries.sort();
    Ok(Some(entries))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Split every report one level below `cfg.input_dir`. Files sitting
/// directly in the input directory are not reports and are left alone.
pub fn split_tree(cfg: &Config) -> Result<Vec<SplitOutputs>> {
    let Some(entries) = sorted_entries(&cfg.input_dir)? else {
        return Ok(Vec::new());
    };

    let mut outputs = Vec::new();
    for dir in entries.into_iter().filter(|p| p.is_dir()) {
        println!("Directory: {}", file_name(&dir));
        let Some(children) = sorted_entries(&dir)? else {
            continue;
        };
        for report in children.into_iter().filter(|p| p.is_file()) {
            println!("File: {}", file_name(&report));
            outputs.push(split::split_report(
                &report,
                &cfg.output_dir,
                cfg.header_lines,
            )?);
        }
    }

    info!(reports = outputs.len(), "split tree");
    Ok(outputs)
}

/// Walk the split outputs and emit the property line or the column stats
/// for each, recognised by the markers in their names.
pub fn summarize_outputs(cfg: &Config) -> Result<Summary> {
    let mut summary = Summary::new(cfg.save);
    let Some(entries) = sorted_entries(&cfg.output_dir)? else {
        return Ok(summary);
    };

    for path in entries.into_iter().filter(|p| p.is_file()) {
        let name = file_name(&path);
        if name.contains(PROPERTIES_MARKER) {
            let value = properties::read_property(&path, &cfg.property)?;
            let value = match value.as_deref() {
                Some(v) => strip_line_ending(v).to_string(),
                None => "not found".to_string(),
            };
            // the token already ends in ": "; no extra separator
            summary.emit(format!("{}{}", cfg.property, value));
        } else if name.contains(DATA_MARKER) {
            summary.emit(format!("Item: {}", display_name(&name)));
            let stats = aggregate::summarize(&path, &cfg.columns)?;
            for col in &stats.columns {
                summary.emit(format!(
                    "Μέση τιμή (mean) της στήλης {}: {}",
                    col.column,
                    Stat(col.mean)
                ));
                summary.emit(format!(
                    "Μαξ τιμή (max) της στήλης {}: {}",
                    col.column,
                    Stat(col.max)
                ));
            }
        }
    }
    Ok(summary)
}

/// Split the input tree, summarise the outputs, and save the summary when
/// `cfg.save` is set.
pub fn run(cfg: &Config) -> Result<Summary> {
    println!("Formatting files");
    split_tree(cfg)?;
    println!("\n\n\nSplitting files\n\n\n");
    let summary = summarize_outputs(cfg)?;
    if cfg.save {
        summary.save(&cfg.summary_file)?;
    }
    Ok(summary)
}
