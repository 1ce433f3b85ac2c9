use anyhow::{Context, Result};
use encoding_rs::mem::{decode_latin1, encode_latin1_lossy};
use std::{fs, path::Path};

/// Read a whole file as Latin-1. Every byte maps to exactly one char, so this
/// never fails on the Greek and extended-Latin annotations found in exports.
pub fn read_latin1(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(decode_latin1(&bytes).into_owned())
}

/// Write text produced by [`read_latin1`] back out as the original bytes.
pub fn write_latin1(path: &Path, text: &str) -> Result<()> {
    fs::write(path, encode_latin1_lossy(text))
        .with_context(|| format!("writing {}", path.display()))
}

/// Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Drop the `\n` or `\r\n` that ends a line, if any.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
