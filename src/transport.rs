//! Retrying HTTP transport.
//!
//! Every network call the crawl makes runs through [`RetryingTransport`]. It
//! wraps the shared `reqwest` client with an exponential-backoff retry loop
//! for transient failures and a cooperative cancellation guard.
//!
//! Three fates for a fetch:
//! - transient errors (5xx, 429, timeouts, connection failures) are retried
//!   invisibly until the attempt budget runs out, then surface as
//!   [`CrawlError::Connectivity`];
//! - a response that exists but cannot be read as the expected type (or a 4xx
//!   status) means the resource is gone or private; it is reported once, returned
//!   as `None`, never retried;
//! - cancellation drops the in-flight request, closing its connection, and
//!   surfaces as [`CrawlError::Cancelled`].

use std::sync::Arc;

use log::{debug, error};
use serde_json::Value;
use tokio_retry::RetryIf;
use tokio_util::sync::CancellationToken;

use crate::error_handling::{is_resource_missing, is_transient, retry_strategy, CrawlError};
use crate::events::{EventLevel, EventSink};

/// HTTP client wrapper with retry, missing-resource, and cancellation
/// handling. Cheap to clone; all state is shared.
#[derive(Clone)]
pub struct RetryingTransport {
    client: Arc<reqwest::Client>,
    cancel: CancellationToken,
    retry_attempts: usize,
    events: Arc<dyn EventSink>,
}

/// Terminal outcome of the retry loop, before the missing-vs-fatal split is
/// folded into each public method's return shape.
enum RequestFailure {
    /// The resource does not exist or is inaccessible (4xx). Not fatal.
    Missing(reqwest::Error),
    /// Connectivity loss past the retry budget, or cancellation. Fatal.
    Fatal(CrawlError),
}

impl RetryingTransport {
    /// Creates a transport over a shared client.
    pub fn new(
        client: Arc<reqwest::Client>,
        cancel: CancellationToken,
        retry_attempts: usize,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            client,
            cancel,
            retry_attempts,
            events,
        }
    }

    /// Performs a GET and returns the raw response.
    ///
    /// Used by the session bootstrap, which needs response cookies. Unlike
    /// [`fetch_json`](Self::fetch_json)/[`fetch_text`](Self::fetch_text), a
    /// 4xx here is fatal: there is no crawl without a bootstrap response.
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, CrawlError> {
        self.request(url, &[]).await.map_err(|failure| match failure {
            RequestFailure::Missing(err) => CrawlError::Connectivity(err),
            RequestFailure::Fatal(err) => err,
        })
    }

    /// Fetches a URL and parses the response as JSON.
    ///
    /// Returns `Ok(None)` when the resource is missing or the body is not
    /// JSON (e.g. the endpoint answered an HTML error page). That signals a
    /// deleted or private resource, not transient unavailability, so it is
    /// reported and absorbed rather than retried.
    pub async fn fetch_json(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Option<Value>, CrawlError> {
        let response = match self.request(url, params).await {
            Ok(response) => response,
            Err(RequestFailure::Missing(err)) => {
                self.report_missing(url, &err);
                return Ok(None);
            }
            Err(RequestFailure::Fatal(err)) => return Err(err),
        };

        match response.json::<Value>().await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_decode() => {
                self.report_missing(url, &err);
                Ok(None)
            }
            Err(err) => Err(CrawlError::Connectivity(err)),
        }
    }

    /// Fetches a URL and returns the response body as text.
    ///
    /// Returns `Ok(None)` when the resource is missing.
    pub async fn fetch_text(&self, url: &str) -> Result<Option<String>, CrawlError> {
        let response = match self.request(url, &[]).await {
            Ok(response) => response,
            Err(RequestFailure::Missing(err)) => {
                self.report_missing(url, &err);
                return Ok(None);
            }
            Err(RequestFailure::Fatal(err)) => return Err(err),
        };

        match response.text().await {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.is_decode() => {
                self.report_missing(url, &err);
                Ok(None)
            }
            Err(err) => Err(CrawlError::Connectivity(err)),
        }
    }

    /// Runs one GET through the retry loop, racing it against cancellation.
    ///
    /// Dropping the in-flight future on cancellation closes the underlying
    /// connection; no further retry attempts start afterwards.
    async fn request(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response, RequestFailure> {
        let send = || async {
            let mut request = self.client.get(url);
            if !params.is_empty() {
                request = request.query(params);
            }
            let response = request.send().await?;
            response.error_for_status()
        };

        debug!("GET {url}");
        let attempt = RetryIf::spawn(retry_strategy(self.retry_attempts), send, is_transient);
        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                return Err(RequestFailure::Fatal(CrawlError::Cancelled));
            }
            outcome = attempt => outcome,
        };

        outcome.map_err(|err| {
            if is_resource_missing(&err) {
                RequestFailure::Missing(err)
            } else {
                RequestFailure::Fatal(CrawlError::Connectivity(err))
            }
        })
    }

    fn report_missing(&self, url: &str, err: &reqwest::Error) {
        error!("Nothing behind {url}: {err}");
        self.events
            .event(EventLevel::Error, &format!("{url} is not available"));
    }
}
