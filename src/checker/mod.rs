// src/checker/mod.rs
// =============================================================================
// This module contains all URL checking logic.
//
// Submodules:
// - validate: Rejects malformed or non-http(s) URLs before any request
// - backoff: Delay between retry attempts
// - result: The CheckResult record and the CheckError taxonomy
// - http: Makes the requests, retries, searches for keywords, fans out
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod backoff;
mod http;
mod result;
mod validate;

#[cfg(test)]
mod test_support;

// Re-export public items from submodules
// This lets users write `checker::UrlChecker` instead of
// `checker::http::UrlChecker`
pub use http::UrlChecker;
pub use result::CheckResult;
