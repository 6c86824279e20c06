//! Data model for crawl inputs and outputs.

use serde::Serialize;

/// Minimal data extracted from one profile card on a search-results page,
/// before enrichment. Consumed exactly once by the enricher.
#[derive(Debug, Clone)]
pub struct ProfileStub {
    /// Absolute URL of the profile.
    pub profile_url: String,
    /// Raw visible text of the card (nickname, and optionally name/location
    /// separated by tab runs).
    pub preview_text: String,
    /// Whether the card carries a country-flag icon. This is the only signal
    /// disambiguating a two-segment preview.
    pub has_country_icon: bool,
    /// Nickname as displayed on the search card.
    pub visible_nickname: String,
    /// Profile id path (the profile URL with the configured base stripped),
    /// used to key the alias-history endpoint.
    pub profile_id_path: String,
}

/// One fully enriched output row; one per matched profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRow {
    /// Profile URL. Never empty.
    pub url: String,
    /// Free-text description from the profile page, if any.
    pub description: Option<String>,
    /// Location from the search card, if present.
    pub location: Option<String>,
    /// Display name from the search card, if present.
    pub name: Option<String>,
    /// Alias history in source order. Never empty: when the alias-history
    /// endpoint yields nothing, the visible search-result nickname is
    /// substituted as the single entry. Positions are 1-based for the
    /// downstream report writer.
    pub nicknames: Vec<String>,
}

/// The aggregated result of one successful crawl.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlResult {
    /// Enriched rows grouped by search page, in page order. Row order within
    /// a page is not guaranteed to match the source site's ordering.
    pub rows_by_page: Vec<Vec<ProfileRow>>,
    /// Total number of matching profiles, fixed at discovery time.
    pub match_count: u64,
}

impl CrawlResult {
    /// Total number of rows across all pages.
    pub fn row_count(&self) -> usize {
        self.rows_by_page.iter().map(Vec::len).sum()
    }

    /// Iterates over all rows across all pages.
    pub fn rows(&self) -> impl Iterator<Item = &ProfileRow> {
        self.rows_by_page.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str) -> ProfileRow {
        ProfileRow {
            url: url.to_string(),
            description: None,
            location: None,
            name: None,
            nicknames: vec![url.to_string()],
        }
    }

    #[test]
    fn test_row_count_sums_pages() {
        let result = CrawlResult {
            rows_by_page: vec![vec![row("a"), row("b")], vec![], vec![row("c")]],
            match_count: 3,
        };
        assert_eq!(result.row_count(), 3);
        assert_eq!(result.rows().count(), 3);
    }

    #[test]
    fn test_empty_result_has_no_rows() {
        let result = CrawlResult::default();
        assert_eq!(result.row_count(), 0);
        assert_eq!(result.match_count, 0);
    }
}
