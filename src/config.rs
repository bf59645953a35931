// src/config.rs
// =============================================================================
// Run configuration, built once from the command-line values.
//
// Everything here is validated before the first request goes out. A bad
// timeout, retry count, concurrency cap or output format ends the run.
// After construction the config is never mutated - the checker owns it and
// every concurrent check reads the same values.
// =============================================================================

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::cli::Cli;

// Problems with the command-line values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("timeout must be positive")]
    NonPositiveTimeout,
    #[error("retries cannot be negative")]
    NegativeRetries,
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
    #[error("output format must be 'csv' or 'json', got '{0}'")]
    UnknownFormat(String),
}

// File format for the list command's --output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
        }
    }
}

// Settings shared by every check in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Per-request timeout, applied to each attempt separately
    pub timeout: Duration,
    /// Extra attempts after the first one fails
    pub max_retries: u32,
    /// Maximum checks in flight at once, None for no limit
    pub concurrency: Option<usize>,
}

impl CheckerConfig {
    // Validates raw command-line numbers into a config
    pub fn new(
        timeout_secs: i64,
        retries: i64,
        concurrency: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if timeout_secs <= 0 {
            return Err(ConfigError::NonPositiveTimeout);
        }
        if retries < 0 {
            return Err(ConfigError::NegativeRetries);
        }
        if concurrency == Some(0) {
            return Err(ConfigError::ZeroConcurrency);
        }

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs.unsigned_abs()),
            max_retries: u32::try_from(retries).unwrap_or(u32::MAX),
            concurrency,
        })
    }

    /// Total attempts a URL gets before it is reported as failed
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

// Everything the commands need, validated in one go
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub checker: CheckerConfig,
    pub format: OutputFormat,
}

impl TryFrom<&Cli> for RunConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let checker = CheckerConfig::new(cli.timeout, cli.retries, cli.concurrency)?;
        let format = cli.format.parse()?;
        Ok(Self { checker, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_valid_config() {
        let config = CheckerConfig::new(5, 2, Some(8)).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.concurrency, Some(8));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(CheckerConfig::new(0, 0, None), Err(ConfigError::NonPositiveTimeout));
        assert_eq!(CheckerConfig::new(-3, 0, None), Err(ConfigError::NonPositiveTimeout));
        assert_eq!(CheckerConfig::new(10, -1, None), Err(ConfigError::NegativeRetries));
        assert_eq!(CheckerConfig::new(10, 0, Some(0)), Err(ConfigError::ZeroConcurrency));
    }

    #[test]
    fn test_output_format() {
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "output format must be 'csv' or 'json', got 'xml'");
    }

    #[test]
    fn test_run_config_from_cli() {
        let cli = Cli::parse_from([
            "urlcheck", "--timeout", "3", "--retries", "1", "--format", "json", "check",
            "https://example.com",
        ]);
        let config = RunConfig::try_from(&cli).unwrap();
        assert_eq!(config.checker.timeout, Duration::from_secs(3));
        assert_eq!(config.checker.max_retries, 1);
        assert_eq!(config.format, OutputFormat::Json);

        let cli = Cli::parse_from(["urlcheck", "--timeout", "-1", "check", "https://example.com"]);
        assert_eq!(RunConfig::try_from(&cli).unwrap_err(), ConfigError::NonPositiveTimeout);
    }
}
