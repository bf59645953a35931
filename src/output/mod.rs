// src/output/mod.rs
// =============================================================================
// Everything that turns results into something a person or program reads.
//
// Submodules:
// - console: one line per result on stdout
// - csv: CSV file with a header row
// - json: pretty-printed JSON array
//
// All of them keep the results in the order they were given.
// =============================================================================

mod console;
mod csv;
mod json;

use anyhow::Result;
use std::path::Path;

use crate::checker::CheckResult;
use crate::config::OutputFormat;

pub use console::print_results;

// Writes results to a file in the requested format
pub fn write_results(results: &[CheckResult], path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => csv::write_csv(results, path),
        OutputFormat::Json => json::write_json(results, path),
    }
}
