//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors that terminate a crawl.
///
/// Transient network errors never surface here directly: they are retried by
/// the transport and only become [`CrawlError::Connectivity`] once the attempt
/// budget is exhausted. A missing resource (e.g. a deleted profile) is not an
/// error at all; it degrades the affected field and the crawl continues.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// The remote service stayed unreachable after exhausting retries.
    #[error("remote service unreachable: {0}")]
    Connectivity(#[from] ReqwestError),

    /// The bootstrap response completed but did not set the session cookie.
    #[error("bootstrap response did not set the '{0}' cookie")]
    MissingSessionCookie(String),

    /// The crawl was cooperatively cancelled.
    #[error("crawl cancelled")]
    Cancelled,
}

impl CrawlError {
    /// Whether this error is a fatal connectivity condition (as opposed to a
    /// cooperative cancellation).
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CrawlError::Cancelled)
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
