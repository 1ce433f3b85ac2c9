use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::{text::read_latin1, ReportError};

/// A data segment parsed into header names and string cells.
#[derive(Debug)]
pub struct Table {
    pub path: PathBuf,
    /// Column names from the first row.
    pub headers: Vec<String>,
    /// Remaining rows; widths may differ from `headers`.
    pub rows: Vec<Vec<String>>,
}

/// Drop the spaces that follow a delimiter outside quotes, so the reader
/// sees `,"x, y"` and keeps the quoted field whole.
fn skip_initial_space(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_quotes = false;
    let mut after_delim = false;
    for c in text.chars() {
        if after_delim && c == ' ' {
            continue;
        }
        after_delim = false;
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => after_delim = true,
            _ => {}
        }
        out.push(c);
    }
    out
}

impl Table {
    /// Parse comma-separated `text`. Spaces right after a delimiter are
    /// dropped, so `a, b` yields `b` rather than ` b` and `a, "b"` is a
    /// quoted field.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let text = skip_initial_space(text);
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.with_context(|| {
                format!("CSV parse error in {} at record {}", path.display(), idx)
            })?;
            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            if headers.is_none() {
                trace!(?fields, "header row");
                headers = Some(fields);
            } else {
                rows.push(fields);
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            headers: headers.unwrap_or_default(),
            rows,
        })
    }

    /// Read and parse a data segment file as Latin-1.
    pub fn read(path: &Path) -> Result<Self> {
        let text = read_latin1(path)?;
        Self::parse(path, &text)
    }

    /// Position of `name` in the header row.
    pub fn column_index(&self, name: &str) -> Result<usize, ReportError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ReportError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    /// Cells of column `idx`; `None` where a row is too short to reach it.
    pub fn column_cells(&self, idx: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows.iter().map(move |row| row.get(idx).map(String::as_str))
    }
}
