/// The fixed-size property block at the top of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSegment {
    /// Lines with their original terminators.
    pub lines: Vec<String>,
}

/// Everything after the header block: a delimited table with a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSegment {
    /// Lines with their original terminators.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub header: HeaderSegment,
    pub data: DataSegment,
}

impl HeaderSegment {
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

impl DataSegment {
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// Cut `text` after its first `header_lines` lines.
///
/// Returns the actual line count as `Err` when the text is too short; the
/// caller turns that into a [`crate::ReportError::TooShort`] with the path.
pub fn partition(text: &str, header_lines: usize) -> Result<SplitReport, usize> {
    let mut lines = text.split_inclusive('\n').map(str::to_string);
    let header: Vec<String> = lines.by_ref().take(header_lines).collect();
    if header.len() < header_lines {
        return Err(header.len());
    }
    let data: Vec<String> = lines.collect();

    Ok(SplitReport {
        header: HeaderSegment { lines: header },
        data: DataSegment { lines: data },
    })
}
