//! Search page fetching and page-count discovery.

use futures::future::try_join_all;
use log::info;
use serde_json::Value;

use crate::error_handling::CrawlError;
use crate::fetch::context::CrawlContext;
use crate::fetch::enrichment::enrich_profile;
use crate::models::ProfileRow;
use crate::parse::{count_cards, extract_stubs};

/// Query parameters for one search-page request. Immutable, built per call.
pub struct PageRequest<'a> {
    /// The nickname being searched.
    pub query: &'a str,
    /// Session token from the bootstrap.
    pub session_token: &'a str,
    /// 1-based page number.
    pub page: usize,
}

impl PageRequest<'_> {
    /// Renders the request as search query parameters.
    pub fn query_params(&self) -> [(&'static str, String); 4] {
        [
            ("text", self.query.to_string()),
            ("filter", "users".to_string()),
            ("sessionid", self.session_token.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

/// What page-count discovery learned from the first results page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryPlan {
    /// Total number of search pages to fetch.
    pub page_count: usize,
    /// Total number of matching profiles.
    pub match_count: u64,
    /// Profile cards per full page.
    pub page_capacity: usize,
}

/// Derives the total page count from a match count and per-page capacity.
///
/// A partially filled final page still counts as one page. Zero capacity
/// means zero pages regardless of the reported match count.
pub fn page_count_for(match_count: u64, page_capacity: usize) -> usize {
    if page_capacity == 0 {
        0
    } else {
        (match_count as usize).div_ceil(page_capacity)
    }
}

/// Discovers the amount of work before any bulk fetching begins.
///
/// Issues one count-only fetch of page 1: the number of cards on it is the
/// per-page capacity, the envelope's result-count field is the match count,
/// and `page_count = ceil(match_count / page_capacity)`. Both totals are
/// computed exactly once and never revised.
///
/// An unavailable or empty first page short-circuits to an all-zero plan.
pub async fn discover(ctx: &CrawlContext, query: &str) -> Result<DiscoveryPlan, CrawlError> {
    let Some(envelope) = fetch_search_envelope(ctx, query, 1).await? else {
        return Ok(DiscoveryPlan::default());
    };

    let page_capacity = match html_fragment(&envelope, ctx) {
        Some(fragment) => count_cards(fragment, &ctx.settings),
        None => 0,
    };
    if page_capacity == 0 {
        return Ok(DiscoveryPlan::default());
    }

    let match_count = envelope
        .get(&ctx.settings.fields.result_count)
        .and_then(Value::as_u64)
        .unwrap_or(0);

    Ok(DiscoveryPlan {
        page_count: page_count_for(match_count, page_capacity),
        match_count,
        page_capacity,
    })
}

/// Fetches one search page and enriches every profile on it.
///
/// All profiles on the page are enriched concurrently; the page completes
/// when the last row does. An unavailable page or one with no cards yields an
/// empty row list, not an error. Only connectivity loss and cancellation
/// propagate.
pub async fn fetch_page_rows(
    ctx: &CrawlContext,
    query: &str,
    page: usize,
) -> Result<Vec<ProfileRow>, CrawlError> {
    let Some(envelope) = fetch_search_envelope(ctx, query, page).await? else {
        return Ok(Vec::new());
    };

    // Html is not Send: extract the stubs in a block scope before fanning out.
    let stubs = match html_fragment(&envelope, ctx) {
        Some(fragment) => extract_stubs(fragment, &ctx.settings),
        None => Vec::new(),
    };

    let rows = try_join_all(stubs.into_iter().map(|stub| enrich_profile(ctx, stub))).await?;
    info!("Search page {page} collected ({} profiles)", rows.len());
    Ok(rows)
}

async fn fetch_search_envelope(
    ctx: &CrawlContext,
    query: &str,
    page: usize,
) -> Result<Option<Value>, CrawlError> {
    let request = PageRequest {
        query,
        session_token: &ctx.session_token,
        page,
    };
    ctx.transport
        .fetch_json(&ctx.settings.search_base_url, &request.query_params())
        .await
}

fn html_fragment<'a>(envelope: &'a Value, ctx: &CrawlContext) -> Option<&'a str> {
    envelope.get(&ctx.settings.fields.html).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count_for(25, 10), 3);
        assert_eq!(page_count_for(20, 10), 2);
        assert_eq!(page_count_for(1, 10), 1);
        assert_eq!(page_count_for(0, 10), 0);
    }

    #[test]
    fn test_zero_capacity_forces_zero_pages() {
        assert_eq!(page_count_for(25, 0), 0);
        assert_eq!(page_count_for(0, 0), 0);
    }

    #[test]
    fn test_page_request_params() {
        let request = PageRequest {
            query: "PlayerOne",
            session_token: "tok",
            page: 3,
        };
        let params = request.query_params();
        assert_eq!(params[0], ("text", "PlayerOne".to_string()));
        assert_eq!(params[1], ("filter", "users".to_string()));
        assert_eq!(params[2], ("sessionid", "tok".to_string()));
        assert_eq!(params[3], ("page", "3".to_string()));
    }
}
