// src/checker/backoff.rs
// =============================================================================
// Delay between retry attempts.
//
// The delay grows linearly: 500ms after the first failed attempt, 1000ms after
// the second, 1500ms after the third, and so on. No jitter, no cap.
// =============================================================================

use std::time::Duration;

// One step of the linear backoff
pub const BACKOFF_UNIT: Duration = Duration::from_millis(500);

// How long to wait after the failed attempt with the given 0-based index
pub fn linear_backoff(attempt: u32) -> Duration {
    BACKOFF_UNIT.saturating_mul(attempt.saturating_add(1))
}
