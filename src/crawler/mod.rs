//! Crawl orchestration.
//!
//! The [`Crawler`] is the public entry point. One crawl moves through
//! bootstrapping (session cookie), discovering (page count from the first
//! page), and scheduling (batched page fetches with per-profile enrichment),
//! ending in one of three terminal states: completed, aborted on a fatal
//! connectivity failure, or cancelled by an explicit stop request. A fatal
//! failure never raises past this boundary; it comes back as a distinct
//! [`CrawlOutcome`] with all outstanding work torn down.
//!
//! A `Crawler` runs exactly one crawl: the session it bootstraps lives for
//! that crawl and is discarded with it.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::error_handling::CrawlError;
use crate::events::{EventLevel, EventSink, LogEventSink, ProgressSink};
use crate::fetch::{discover, fetch_page_rows, CrawlContext};
use crate::initialization::init_client;
use crate::models::CrawlResult;
use crate::scheduler::run_slices;
use crate::session::acquire_session;
use crate::transport::RetryingTransport;

/// Terminal state of one crawl.
#[derive(Debug)]
pub enum CrawlOutcome {
    /// The crawl completed; every discovered page was processed.
    Completed(CrawlResult),
    /// A fatal connectivity failure (or missing session cookie) aborted the
    /// crawl. No usable rows were produced.
    Aborted(CrawlError),
    /// The crawl was stopped by a cancellation request.
    Cancelled,
}

/// Remote control for stopping a running crawl. Cheap to clone and safe to
/// use from any task or thread.
#[derive(Clone)]
pub struct StopHandle {
    cancel: CancellationToken,
}

impl StopHandle {
    /// Requests cooperative cancellation of every outstanding fetch and
    /// enrichment task. Safe to call at any time; after the crawl has
    /// finished it is a no-op.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

/// The crawl orchestrator.
pub struct Crawler {
    settings: Arc<Settings>,
    client: Arc<reqwest::Client>,
    events: Arc<dyn EventSink>,
    cancel: CancellationToken,
}

impl Crawler {
    /// Creates a crawler for one crawl.
    ///
    /// Validates the settings and builds the shared HTTP client. Events go to
    /// the `log` facade unless [`with_event_sink`](Self::with_event_sink)
    /// replaces the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation or the HTTP client
    /// cannot be constructed.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid crawl settings")?;
        let client = init_client(&settings).context("Failed to initialize HTTP client")?;
        Ok(Self {
            settings: Arc::new(settings),
            client,
            events: Arc::new(LogEventSink),
            cancel: CancellationToken::new(),
        })
    }

    /// Replaces the event sink.
    pub fn with_event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Returns a handle that can stop this crawl from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            cancel: self.cancel.clone(),
        }
    }

    /// Requests cooperative cancellation. Equivalent to
    /// [`StopHandle::stop`].
    pub fn request_stop(&self) {
        self.cancel.cancel();
    }

    /// Runs the crawl for a nickname query.
    ///
    /// Sequences session bootstrap, page-count discovery, and batched page
    /// fetching, reporting fractional progress through `progress` after each
    /// completed batch. This never panics or returns a `Result`: every
    /// failure mode is folded into the returned [`CrawlOutcome`].
    pub async fn run(&self, query: &str, progress: &dyn ProgressSink) -> CrawlOutcome {
        let started = Instant::now();
        info!("Starting crawl for '{query}'");
        self.events.event(EventLevel::Info, "Starting crawl");

        match self.crawl(query, progress).await {
            Ok(result) => {
                self.events.event(
                    EventLevel::Success,
                    &format!(
                        "Crawl finished in {:.2} seconds ({} profiles)",
                        started.elapsed().as_secs_f64(),
                        result.row_count()
                    ),
                );
                CrawlOutcome::Completed(result)
            }
            Err(CrawlError::Cancelled) => {
                info!("Crawl stopped");
                CrawlOutcome::Cancelled
            }
            Err(err) => {
                // Tear down outstanding work before reporting the abort.
                self.cancel.cancel();
                self.events
                    .event(EventLevel::Error, &format!("Crawl aborted: {err}"));
                CrawlOutcome::Aborted(err)
            }
        }
    }

    async fn crawl(
        &self,
        query: &str,
        progress: &dyn ProgressSink,
    ) -> Result<CrawlResult, CrawlError> {
        if self.cancel.is_cancelled() {
            return Err(CrawlError::Cancelled);
        }

        let transport = RetryingTransport::new(
            Arc::clone(&self.client),
            self.cancel.clone(),
            self.settings.retry_attempts,
            Arc::clone(&self.events),
        );
        let session_token = acquire_session(&transport, &self.settings).await?;

        let ctx = CrawlContext {
            settings: Arc::clone(&self.settings),
            transport,
            session_token,
            events: Arc::clone(&self.events),
        };

        info!("Looking up result pages");
        let plan = discover(&ctx, query).await?;
        if plan.page_count == 0 {
            info!("No matching profiles for '{query}'");
            progress.progress(1.0);
            return Ok(CrawlResult::default());
        }
        info!(
            "Found {} pages ({} matches, {} per page)",
            plan.page_count, plan.match_count, plan.page_capacity
        );

        let rows_by_page = run_slices(
            plan.page_count,
            self.settings.slice_width,
            |page| fetch_page_rows(&ctx, query, page),
            progress,
        )
        .await?;

        Ok(CrawlResult {
            rows_by_page,
            match_count: plan.match_count,
        })
    }
}
