//! Error handling.
//!
//! This module provides:
//! - The crawl error taxonomy
//! - Retry strategy configuration
//! - Transient-vs-permanent error categorization
//!
//! The taxonomy separates three fates for a failed fetch:
//! - **Transient**: retried invisibly with backoff
//! - **Missing resource**: absorbed where it happened; the field degrades
//! - **Fatal**: connectivity loss or cancellation; terminates the crawl

mod categorization;
mod types;

pub use categorization::{is_resource_missing, is_transient, retry_strategy};
pub use types::{CrawlError, InitializationError};
