// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - check: check a single URL
// - list:  check every URL listed in a file, optionally saving the results
//
// The global options (timeout, retries, format, concurrency) are accepted
// before or after the subcommand. They are parsed as plain numbers/strings
// here and validated into a CheckerConfig by src/config.rs, so that a bad
// value is reported with our own message before any request is made.
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "urlcheck",
    version = "0.1.0",
    about = "A CLI tool to check URL status and content",
    long_about = "urlcheck requests one or many URLs concurrently and reports their status code, \
                  response time and, optionally, whether a keyword appears in the page."
)]
pub struct Cli {
    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value_t = 10, allow_negative_numbers = true)]
    pub timeout: i64,

    /// Number of retries for failed requests
    #[arg(long, global = true, default_value_t = 0, allow_negative_numbers = true)]
    pub retries: i64,

    /// Output format: csv or json
    #[arg(long, global = true, default_value = "csv")]
    pub format: String,

    /// Maximum number of URLs checked at the same time (default: no limit)
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a single URL
    ///
    /// Example: urlcheck check https://example.com --keyword rust
    Check {
        /// URL to check (must be http or https)
        url: String,

        /// Keyword to search for in the page (case-insensitive)
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Check multiple URLs from a file
    ///
    /// Example: urlcheck list urls.txt --output results.json --format json
    List {
        /// File with one URL per line (blank lines are ignored)
        file: String,

        /// Keyword to search for in pages (case-insensitive)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Output file for results (CSV or JSON based on --format)
        #[arg(short, long)]
        output: Option<String>,
    },
}
