// src/checker/result.rs
// =============================================================================
// The record every URL check produces, and the ways a check can fail.
//
// A CheckResult is built once per URL (retries never produce intermediate
// results) and is handed to the console printer and the CSV/JSON writers.
//
// JSON shape (one object per URL):
//   {
//     "url": "https://example.com",
//     "status_code": 200,
//     "response_time": 152300000,   <- nanoseconds
//     "keyword_found": false,
//     "error": ""                   <- empty when the check succeeded
//   }
// =============================================================================

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::validate::ValidationError;

// Why a single URL check failed
//
// These never stop the program - they are rendered into CheckResult::error
// and checking carries on with the other URLs
#[derive(Debug, Error)]
pub enum CheckError {
    /// The URL was rejected before any request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Every attempt failed at the transport level
    #[error("failed after {attempts} {}: {source}", attempt_noun(.attempts))]
    Transport {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body could not be read
    #[error("error reading body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The task running the check died before producing a result
    #[error("check task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

fn attempt_noun(attempts: &u32) -> &'static str {
    if *attempts == 1 {
        "attempt"
    } else {
        "attempts"
    }
}

// Represents the result of checking a single URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The URL exactly as the caller gave it
    pub url: String,
    /// HTTP status code, 0 if no response was received
    pub status_code: u16,
    /// Time from the first attempt until the response arrived
    #[serde(with = "duration_nanos")]
    pub response_time: Duration,
    /// Whether the keyword appeared in the body (false if none was asked for)
    pub keyword_found: bool,
    /// What went wrong, if anything
    #[serde(default, with = "empty_as_none")]
    pub error: Option<String>,
}

impl CheckResult {
    // A fresh result for a URL, with every other field at its default
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    // A result that only carries an error
    pub fn failed(url: impl Into<String>, error: &CheckError) -> Self {
        let mut result = Self::new(url);
        result.record_error(error);
        result
    }

    pub fn record_error(&mut self, error: &CheckError) {
        self.error = Some(error.to_string());
    }

    /// True when a status code was obtained and nothing went wrong afterwards
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.status_code > 0
    }
}

// Durations travel through JSON as a whole number of nanoseconds
mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = u64::try_from(value.as_nanos()).unwrap_or(u64::MAX);
        serializer.serialize_u64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}

// A missing error is written as "" rather than null
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.is_empty()))
    }
}
