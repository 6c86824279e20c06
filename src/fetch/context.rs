//! Crawl context for page and enrichment operations.

use std::sync::Arc;

use crate::config::Settings;
use crate::events::EventSink;
use crate::transport::RetryingTransport;

/// Context containing all shared resources needed while fetching pages and
/// enriching profiles.
///
/// Grouping these reduces function argument counts; everything inside is
/// read-only (or internally synchronized, like the HTTP client's connection
/// pool), so the context is shared freely across concurrent tasks.
#[derive(Clone)]
pub struct CrawlContext {
    /// Crawl configuration.
    pub settings: Arc<Settings>,
    /// Retrying HTTP transport all fetches run through.
    pub transport: RetryingTransport,
    /// Session token obtained by the bootstrap, sent with every search query.
    pub session_token: String,
    /// Event sink for user-visible progress and diagnostics.
    pub events: Arc<dyn EventSink>,
}
