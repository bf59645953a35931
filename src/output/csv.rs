// src/output/csv.rs
// =============================================================================
// Writes results as CSV:
//
//   URL,StatusCode,ResponseTime,KeywordFound,Error
//   https://example.com,200,152.3ms,true,
//   ftp://host,0,0ns,false,URL must use http or https scheme
//
// Quoting of commas, quotes and newlines is left to the csv crate.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

use crate::checker::CheckResult;

const HEADER: [&str; 5] = ["URL", "StatusCode", "ResponseTime", "KeywordFound", "Error"];

pub fn write_csv(results: &[CheckResult], path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(HEADER)?;

    for result in results {
        writer.write_record([
            result.url.clone(),
            result.status_code.to_string(),
            format!("{:?}", result.response_time),
            result.keyword_found.to_string(),
            result.error.clone().unwrap_or_default(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
