// src/input.rs
// =============================================================================
// Reads the list of URLs for the `list` command.
//
// One URL per line. Surrounding whitespace is trimmed and blank lines are
// skipped. Bytes that are not valid UTF-8 are replaced rather than failing
// the whole file, so the readable lines still get checked.
//
// Nothing is validated here - invalid URLs are reported per URL by the
// checker, so they still get a row in the output.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

// Reads URLs from a file, one per line, keeping file order
pub fn read_urls(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    Ok(parse_urls(&String::from_utf8_lossy(&data)))
}

fn parse_urls(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
