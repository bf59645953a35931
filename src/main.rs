// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing events go to stderr, results go to stdout)
// 2. Parse command-line arguments using clap
// 3. Validate the global options into a RunConfig - before any request
// 4. Dispatch to the appropriate subcommand handler
// 5. Exit with proper code (0 = run completed, 1 = bad input, 2 = internal error)
//
// Failing URLs do not change the exit code: they are reported per URL.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - validation, requests, retries, fan-out
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated run settings
mod input; // src/input.rs - reading the URL list
mod output; // src/output/ - console, CSV and JSON output

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checker::UrlChecker;
use cli::{Cli, Commands};
use config::{OutputFormat, RunConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs are off the result channel: stderr, warnings and up unless RUST_LOG
// says otherwise
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urlcheck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Returns:
//   Ok(0) = run completed (individual URLs may still have failed)
//   Ok(1) = bad options, unreadable URL file or unwritable output file
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Nothing touches the network until the options are known to be valid
    let config = match RunConfig::try_from(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    let checker = UrlChecker::new(config.checker.clone()).context("failed to build HTTP client")?;

    info!(
        timeout = ?checker.config().timeout,
        retries = checker.config().max_retries,
        concurrency = ?checker.config().concurrency,
        format = %config.format,
        "checker ready"
    );

    match cli.command {
        Commands::Check { url, keyword } => handle_check(&checker, &url, keyword.as_deref()).await,
        Commands::List {
            file,
            keyword,
            output,
        } => {
            handle_list(
                &checker,
                &file,
                keyword.as_deref(),
                output.as_deref(),
                config.format,
            )
            .await
        }
    }
}

// Handles the 'check' subcommand
async fn handle_check(checker: &UrlChecker, url: &str, keyword: Option<&str>) -> Result<i32> {
    let result = checker.check_url(url, keyword).await;
    output::print_results(std::slice::from_ref(&result));
    Ok(0)
}

// Handles the 'list' subcommand
//
// Every URL in the file is checked, every result printed, and the results
// optionally saved to the --output file in --format
async fn handle_list(
    checker: &UrlChecker,
    file: &str,
    keyword: Option<&str>,
    output_file: Option<&str>,
    format: OutputFormat,
) -> Result<i32> {
    let urls = match input::read_urls(file) {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("Error reading URLs: {:#}", e);
            return Ok(1);
        }
    };

    info!(count = urls.len(), file, "checking URLs");

    let results = checker.check_urls(urls, keyword).await;
    output::print_results(&results);

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    info!(total = results.len(), failed, "all checks finished");

    if let Some(path) = output_file {
        if let Err(e) = output::write_results(&results, Path::new(path), format) {
            eprintln!("Error writing output: {:#}", e);
            return Ok(1);
        }
        println!("Results saved to {}", path);
    }

    Ok(0)
}
