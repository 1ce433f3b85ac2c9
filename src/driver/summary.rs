use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

/// Display lines produced by a run. Every line is echoed to stdout; when
/// `save` is set it is also kept for [`Summary::save`].
#[derive(Debug, Default)]
pub struct Summary {
    save: bool,
    lines: Vec<String>,
}

impl Summary {
    pub fn new(save: bool) -> Self {
        Self {
            save,
            lines: Vec::new(),
        }
    }

    pub fn emit(&mut self, line: String) {
        println!("{line}");
        if self.save {
            self.lines.push(line);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Overwrite `path` with one newline-terminated line per record.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating summary file {}", path.display()))?;
        let mut w = BufWriter::new(file);
        for line in &self.lines {
            writeln!(w, "{line}")?;
        }
        w.flush()
            .with_context(|| format!("writing summary file {}", path.display()))?;

        info!(path = %path.display(), lines = self.lines.len(), "summary saved");
        println!("Output saved to {}", path.display());
        Ok(())
    }
}
