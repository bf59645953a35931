// src/checker/http.rs
// =============================================================================
// This module checks URLs by making HTTP GET requests.
//
// Key functionality:
// - Validates each URL before touching the network
// - Retries transport failures with a linear backoff (500ms, 1000ms, ...)
// - Optionally reads the body and searches it for a keyword
// - Runs many checks concurrently and returns results in input order
//
// A response with any status code counts as a transport-level success.
// 404s and 500s are reported through the status code, not as errors.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Streams: For running many checks with an optional concurrency limit
// - tokio::spawn: Each URL gets its own task
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffered()
use reqwest::{Client, Response};
use std::time::Instant;
use tracing::{debug, warn};

use super::backoff::linear_backoff;
use super::result::{CheckError, CheckResult};
use super::validate::validate_url;
use crate::config::CheckerConfig;

// Checks URLs using one shared HTTP client
//
// Cloning is cheap: the client is reference counted internally and the
// config is a handful of numbers. Every spawned check gets its own clone.
#[derive(Debug, Clone)]
pub struct UrlChecker {
    client: Client,
    config: CheckerConfig,
}

impl UrlChecker {
    // Builds the HTTP client with the configured per-request timeout
    pub fn new(config: CheckerConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    // Uses a client the caller already configured
    //
    // The client's own timeout is what bounds each attempt; config.timeout
    // is only read by new()
    pub fn with_client(client: Client, config: CheckerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    // Checks a single URL
    //
    // Never fails: every problem ends up in the returned result's error field.
    // An empty keyword is treated the same as no keyword.
    pub async fn check_url(&self, url: &str, keyword: Option<&str>) -> CheckResult {
        let mut result = CheckResult::new(url);

        if let Err(e) = validate_url(url) {
            debug!(url, error = %e, "rejected invalid URL");
            result.record_error(&CheckError::from(e));
            return result;
        }

        // The clock starts before the first attempt, so backoff sleeps count
        let start = Instant::now();

        let response = match self.fetch_with_retries(url).await {
            Ok(response) => response,
            Err(e) => {
                result.record_error(&e);
                return result;
            }
        };

        result.status_code = response.status().as_u16();
        result.response_time = start.elapsed();

        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            // text() consumes the response; without a keyword it is simply
            // dropped when we return, which releases the connection
            match response.text().await {
                Ok(body) => result.keyword_found = contains_ignore_case(&body, keyword),
                Err(e) => result.record_error(&CheckError::BodyRead(e)),
            }
        }

        debug!(
            url,
            status = result.status_code,
            elapsed = ?result.response_time,
            keyword_found = result.keyword_found,
            "check finished"
        );

        result
    }

    // Sends GET requests until one gets a response or we run out of attempts
    async fn fetch_with_retries(&self, url: &str) -> Result<Response, CheckError> {
        let attempts = self.config.max_attempts();
        let mut attempt = 0;

        loop {
            match self.client.get(url).send().await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(url, attempt = attempt + 1, attempts, error = %e, "request failed");

                    if attempt + 1 >= attempts {
                        return Err(CheckError::Transport { attempts, source: e });
                    }

                    let delay = linear_backoff(attempt);
                    debug!(url, ?delay, "backing off before retry");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    // Checks multiple URLs concurrently
    //
    // Returns exactly one result per input URL, in the same order as the
    // input, no matter which check finishes first. With no concurrency limit
    // every check starts right away.
    pub async fn check_urls(&self, urls: Vec<String>, keyword: Option<&str>) -> Vec<CheckResult> {
        let limit = self.config.concurrency.unwrap_or(urls.len()).max(1);
        let keyword = keyword.filter(|k| !k.is_empty()).map(str::to_owned);

        debug!(count = urls.len(), limit, "dispatching checks");

        let checks = urls.into_iter().map(|url| {
            let checker = self.clone();
            let keyword = keyword.clone();
            async move {
                // The task is spawned when .buffered() first polls this future,
                // so the concurrency limit also limits spawned tasks
                let task_url = url.clone();
                let handle = tokio::spawn(async move {
                    checker.check_url(&task_url, keyword.as_deref()).await
                });

                match handle.await {
                    Ok(result) => result,
                    Err(e) => CheckResult::failed(url, &CheckError::Task(e)),
                }
            }
        });

        // .buffered() (unlike .buffer_unordered()) yields results in the
        // order the futures were created, which is the input order
        stream::iter(checks).buffered(limit).collect().await
    }
}

// Case-insensitive substring search over the whole body
fn contains_ignore_case(body: &str, keyword: &str) -> bool {
    body.to_lowercase().contains(&keyword.to_lowercase())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why spawn a task per URL when .buffered() already runs futures
//    concurrently?
//    - .buffered() polls all its futures from the one task that awaits it
//    - tokio::spawn hands each check to the runtime's thread pool
//    - Awaiting the JoinHandle gives the result back, in order
//
// 2. Where is the response closed?
//    - reqwest::Response owns the connection
//    - When it goes out of scope (or text() consumes it), the connection is
//      released - on every return path, with no explicit close call
//
// 3. Why is the clock started before the retry loop?
//    - response_time measures how long the caller waited for an answer,
//      including failed attempts and the sleeps between them
// -----------------------------------------------------------------------------
