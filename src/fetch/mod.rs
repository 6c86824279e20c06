//! Page fetching, discovery, and enrichment.
//!
//! This module provides:
//! - The shared [`CrawlContext`]
//! - Page-count discovery and per-page fetching
//! - Per-profile enrichment fan-out

mod context;
mod enrichment;
mod page;

pub use context::CrawlContext;
pub use enrichment::enrich_profile;
pub use page::{discover, fetch_page_rows, page_count_for, DiscoveryPlan, PageRequest};
