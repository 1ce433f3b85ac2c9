use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::text::read_latin1;

/// Property looked up in header segments when none is configured. The two
/// spaces before the colon are part of the token.
pub const DEFAULT_PROPERTY: &str = "Max Broadband Resultant  : ";

/// Value of the first line containing `property`: everything after the token,
/// line terminator included. `None` when no line carries it.
pub fn find_property(text: &str, property: &str) -> Option<String> {
    text.split_inclusive('\n').find_map(|line| {
        line.find(property)
            .map(|idx| line[idx + property.len()..].to_string())
    })
}

/// [`find_property`] over a header segment file.
pub fn read_property(path: &Path, property: &str) -> Result<Option<String>> {
    let text = read_latin1(path)?;
    let value = find_property(&text, property);
    debug!(path = %path.display(), property, found = value.is_some(), "property lookup");
    Ok(value)
}
