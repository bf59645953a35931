// src/checker/validate.rs
// =============================================================================
// This module decides whether a string is a URL we are willing to request.
//
// Rules:
// - The string must not be empty
// - It must parse as a URL
// - The scheme must be http or https
// - The host must not be empty
//
// No network I/O happens here. Invalid URLs are never retried.
// =============================================================================

use thiserror::Error;
use url::{ParseError, Url};

// Why a URL was rejected before any request was made
//
// The Display text is what ends up in the result's error field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL is empty")]
    EmptyUrl,
    #[error("invalid URL: {0}")]
    MalformedUrl(String),
    #[error("URL must use http or https scheme")]
    UnsupportedScheme,
    #[error("URL must have a valid host")]
    MissingHost,
}

// Checks that a raw URL string is well-formed and points at an http(s) host
pub fn validate_url(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        // Either no scheme at all ("example.com") or junk in front of the
        // first colon ("http ://x")
        Err(ParseError::RelativeUrlWithoutBase) => {
            return Err(match raw.split_once(':') {
                Some((scheme, _)) if !is_scheme(scheme) => {
                    ValidationError::MalformedUrl(format!("invalid scheme \"{}\"", scheme))
                }
                _ => ValidationError::UnsupportedScheme,
            });
        }
        // The url crate refuses "http://" outright, so the scheme still has
        // to be looked at to pick the right error ("ftp://" is a scheme problem)
        Err(ParseError::EmptyHost) => {
            return Err(if has_http_scheme(raw) {
                ValidationError::MissingHost
            } else {
                ValidationError::UnsupportedScheme
            });
        }
        Err(e) => return Err(ValidationError::MalformedUrl(e.to_string())),
    };

    // The parser already lowercases the scheme
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::UnsupportedScheme);
    }

    // The parser reads "http:example.com" as "http://example.com/", so the
    // authority only counts when the raw text spells out the "//"
    if !has_authority(raw) {
        return Err(ValidationError::MissingHost);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingHost),
    }
}

fn has_http_scheme(raw: &str) -> bool {
    match raw.split_once(':') {
        Some((scheme, _)) => {
            scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
        }
        None => false,
    }
}

fn has_authority(raw: &str) -> bool {
    raw.split_once(':')
        .map_or(false, |(_, rest)| rest.starts_with("//"))
}

// A letter followed by letters, digits, '+', '-' or '.'
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(validate_url("http://example.com"), Ok(()));
        assert_eq!(validate_url("https://example.com/path?q=1"), Ok(()));
        assert_eq!(validate_url("http://127.0.0.1:8080/health"), Ok(()));
        assert_eq!(validate_url("HTTPS://Example.com"), Ok(()));
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(validate_url(""), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn test_unsupported_scheme() {
        assert_eq!(validate_url("ftp://host"), Err(ValidationError::UnsupportedScheme));
        assert_eq!(validate_url("ftp://"), Err(ValidationError::UnsupportedScheme));
        assert_eq!(
            validate_url("mailto:someone@example.com"),
            Err(ValidationError::UnsupportedScheme)
        );
        assert_eq!(validate_url("example.com"), Err(ValidationError::UnsupportedScheme));
    }

    #[test]
    fn test_missing_host() {
        assert_eq!(validate_url("http://"), Err(ValidationError::MissingHost));
        assert_eq!(validate_url("https://"), Err(ValidationError::MissingHost));
        assert_eq!(validate_url("HTTP://"), Err(ValidationError::MissingHost));
        assert_eq!(validate_url("http://:80"), Err(ValidationError::MissingHost));
    }

    #[test]
    fn test_host_needs_double_slash() {
        assert_eq!(validate_url("http:example.com"), Err(ValidationError::MissingHost));
        assert_eq!(validate_url("http:/example.com"), Err(ValidationError::MissingHost));
        assert_eq!(validate_url("https:example.com/path"), Err(ValidationError::MissingHost));
    }

    #[test]
    fn test_malformed_url() {
        let err = validate_url("http://exa mple.com").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedUrl(_)));
        assert!(err.to_string().starts_with("invalid URL: "));
    }

    #[test]
    fn test_junk_before_colon_is_malformed() {
        let err = validate_url("http ://x").unwrap_err();
        assert_eq!(err, ValidationError::MalformedUrl("invalid scheme \"http \"".to_string()));
        assert!(matches!(validate_url("1http://x"), Err(ValidationError::MalformedUrl(_))));
    }

    #[test]
    fn test_is_scheme() {
        assert!(is_scheme("http"));
        assert!(is_scheme("svn+ssh"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("http "));
        assert!(!is_scheme("9p"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::EmptyUrl.to_string(), "URL is empty");
        assert_eq!(
            ValidationError::MissingHost.to_string(),
            "URL must have a valid host"
        );
    }
}
