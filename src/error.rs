use std::path::PathBuf;
use thiserror::Error;

/// Failures a caller may want to tell apart. They travel inside
/// `anyhow::Error` and can be recovered with `downcast_ref`.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report has fewer lines than the fixed header block.
    #[error("report {path} has {lines} lines, header needs {needed}")]
    TooShort {
        path: PathBuf,
        lines: usize,
        needed: usize,
    },

    /// A target column is absent from the data segment's header row.
    #[error("column {column:?} not found in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// An input or output directory does not exist.
    #[error("The folder {0} does not exist.")]
    DirectoryNotFound(PathBuf),
}
