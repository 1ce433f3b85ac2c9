// src/aggregate/mod.rs
use anyhow::Result;
use arrow::{
    array::{Array, Float64Array, Float64Builder},
    compute,
};
use std::{fmt, path::Path};
use tracing::{debug, instrument};

use crate::text::clean_str;

pub mod table;

pub use table::Table;

/// Columns summarised when none are configured.
pub const DEFAULT_COLUMNS: [&str; 2] = ["Brd Reslt", "Brd Load"];

/// Mean and max of one column over its numeric cells.
///
/// `mean` and `max` are `None` when no cell in the column parsed as a
/// number; that is the "undefined" result, distinct from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column: String,
    pub mean: Option<f64>,
    pub max: Option<f64>,
    /// Cells that parsed as numbers.
    pub present: usize,
    /// Cells that did not, including cells absent from short rows.
    pub missing: usize,
}

/// Per-column stats for one data segment, in the order asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSummary {
    pub columns: Vec<ColumnStats>,
}

impl DataSummary {
    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.column == column)
    }
}

/// Parse each cell as `f64`. Anything unparseable, including a literal NaN,
/// becomes null rather than an error.
pub fn coerce_numeric<'a, I>(cells: I) -> Float64Array
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut b = Float64Builder::new();
    for cell in cells {
        let v = cell
            .and_then(|s| clean_str(s).parse::<f64>().ok())
            .filter(|v| !v.is_nan());
        b.append_option(v);
    }
    b.finish()
}

/// Mean and max over the non-null values of `values`.
pub fn stats_of(column: &str, values: &Float64Array) -> ColumnStats {
    let present = values.len() - values.null_count();
    let mean = compute::sum(values).and_then(|total| {
        if present == 0 {
            None
        } else {
            Some(total / present as f64)
        }
    });

    ColumnStats {
        column: column.to_string(),
        mean,
        max: compute::max(values),
        present,
        missing: values.null_count(),
    }
}

/// Stats for `column` of `table`. A column absent from the header row is a
/// hard [`crate::ReportError::MissingColumn`].
pub fn column_stats(table: &Table, column: &str) -> Result<ColumnStats> {
    let idx = table.column_index(column)?;
    let values = coerce_numeric(table.column_cells(idx));
    let stats = stats_of(column, &values);
    debug!(
        column,
        present = stats.present,
        missing = stats.missing,
        "column coerced"
    );
    Ok(stats)
}

/// Read the data segment at `path` and compute stats for each of `columns`.
#[instrument(level = "info", skip(path, columns), fields(path = %path.as_ref().display()))]
pub fn summarize<P: AsRef<Path>, S: AsRef<str>>(path: P, columns: &[S]) -> Result<DataSummary> {
    let table = Table::read(path.as_ref())?;
    let columns = columns
        .iter()
        .map(|c| column_stats(&table, c.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(DataSummary { columns })
}

/// Renders a stat the way the summary file shows it: `nan` when undefined,
/// integral values with a trailing `.0`, and magnitudes outside
/// `[1e-4, 1e16)` in exponent form with a signed two-digit exponent.
pub struct Stat(pub Option<f64>);

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("nan"),
            Some(v) if v.is_infinite() => f.write_str(if v > 0.0 { "inf" } else { "-inf" }),
            Some(v) if v != 0.0 && (v.abs() >= 1e16 || v.abs() < 1e-4) => {
                let sci = format!("{v:e}");
                let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                write!(f, "{mantissa}e{sign}{:02}", exp.abs())
            }
            Some(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Some(v) => write!(f, "{v}"),
        }
    }
}
