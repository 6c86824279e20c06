//! Error categorization and retry strategy.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{RETRY_FACTOR, RETRY_INITIAL_DELAY_MS, RETRY_MAX_DELAY_SECS};

/// Creates an exponential backoff retry strategy.
///
/// Returns a strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR` (doubles delay each retry)
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Maximum retries: `attempts` (prevents infinite retries)
pub fn retry_strategy(attempts: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_INITIAL_DELAY_MS)
        .factor(RETRY_FACTOR)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(attempts)
}

/// Determines if a request error is transient (should be retried).
///
/// Retriable: server errors (5xx), rate limiting (429), and network-level
/// timeout/connect/request failures. Not retriable: other client errors (4xx),
/// redirect loops, body decode failures, and request builder errors: those
/// indicate the resource or the request itself is the problem, so another
/// attempt cannot succeed.
pub fn is_transient(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        let code = status.as_u16();
        if code == 429 {
            return true;
        }
        if (400..500).contains(&code) {
            return false;
        }
        if (500..600).contains(&code) {
            return true;
        }
    }

    if error.is_timeout() || error.is_connect() || error.is_request() {
        return true;
    }
    if error.is_redirect() || error.is_decode() || error.is_builder() {
        return false;
    }

    // Default: retry unknown errors (might be a transient network issue)
    true
}

/// Determines if a request error means the targeted resource does not exist
/// or is inaccessible (a 4xx response other than 429).
///
/// Such a fetch is never retried and never fatal: the caller degrades the
/// affected field instead.
pub fn is_resource_missing(error: &reqwest::Error) -> bool {
    error
        .status()
        .is_some_and(|status| status.is_client_error() && status.as_u16() != 429)
}
