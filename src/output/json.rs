// src/output/json.rs
// =============================================================================
// Writes results as a JSON array, pretty-printed with two-space indentation.
// Field names and encodings come from CheckResult's serde attributes.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

use crate::checker::CheckResult;

pub fn write_json(results: &[CheckResult], path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(results)?;
    std::fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
