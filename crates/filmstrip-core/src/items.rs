//! Item label sources for hosts that build a strip from text.

use std::path::Path;

use crate::{Error, Result};

/// Parse labels, one per non-empty line. Surrounding whitespace is trimmed.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated label list
pub fn split_labels(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read labels from a file
pub fn read_labels(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let labels = parse_labels(&content);
    if labels.is_empty() {
        return Err(Error::Items(format!("{} contains no items", path.display())));
    }
    Ok(labels)
}

/// Labels used when no source is given
pub fn sample_labels() -> Vec<String> {
    ["Aurora", "Basalt", "Cinder", "Dune", "Estuary", "Fjord", "Glacier"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
