use std::path::{Path, PathBuf};

pub const PROPERTIES_MARKER: &str = "-properties";
pub const DATA_MARKER: &str = "-csv";
const CSV_EXT: &str = ".csv";

/// Base name for the split outputs: one trailing `.csv` removed.
pub fn output_stem(file_name: &str) -> &str {
    file_name.strip_suffix(CSV_EXT).unwrap_or(file_name)
}

/// `(<stem>-properties.csv, <stem>-csv.csv)` inside `out_dir`.
pub fn output_paths(file_name: &str, out_dir: &Path) -> (PathBuf, PathBuf) {
    let stem = output_stem(file_name);
    (
        out_dir.join(format!("{stem}{PROPERTIES_MARKER}{CSV_EXT}")),
        out_dir.join(format!("{stem}{DATA_MARKER}{CSV_EXT}")),
    )
}

/// Item name shown in the summary for a split output file: the stem that
/// [`output_paths`] appended its marker to.
pub fn display_name(file_name: &str) -> &str {
    let name = file_name.strip_suffix(CSV_EXT).unwrap_or(file_name);
    name.strip_suffix(DATA_MARKER)
        .or_else(|| name.strip_suffix(PROPERTIES_MARKER))
        .unwrap_or(name)
}
