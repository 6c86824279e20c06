//! Configuration constants.
//!
//! This module defines the compiled-in defaults and operational parameters
//! used when a [`Settings`](super::Settings) field is not overridden.

/// Default base URL of the community search endpoint.
///
/// The endpoint answers a JSON envelope whose `html` field carries the profile
/// cards for one result page.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://steamcommunity.com/search/SearchCommunityAjax";

/// Default base URL that profile links share.
///
/// Everything after this prefix in a profile link is the profile's id path
/// (e.g. `id/somebody` or `profiles/7656...`).
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://steamcommunity.com/";

/// Default alias-history URL template. `{}` receives the profile id path.
pub const DEFAULT_NICKNAME_HISTORY_URL: &str = "https://steamcommunity.com/{}/ajaxaliases/";

/// Name of the anti-automation session cookie the search endpoint requires.
pub const DEFAULT_SESSION_COOKIE: &str = "sessionid";

/// CSS selector matching one profile card on a search-results page.
pub const DEFAULT_PROFILE_CARD_SELECTOR: &str = ".search_row";

/// CSS selector matching the profile link inside a card.
pub const DEFAULT_PROFILE_LINK_SELECTOR: &str = "a.searchPersonaName";

/// CSS selector matching the free-text description block on a profile page.
pub const DEFAULT_DESCRIPTION_SELECTOR: &str = ".profile_summary";

/// JSON field of the search envelope carrying the profile-card HTML fragment.
pub const DEFAULT_HTML_FIELD: &str = "html";

/// JSON field of the search envelope carrying the total match count.
pub const DEFAULT_RESULT_COUNT_FIELD: &str = "search_result_count";

/// JSON field of an alias-history entry carrying the nickname.
pub const DEFAULT_NICKNAME_FIELD: &str = "newname";

/// Default number of retries per request after a transient failure.
pub const DEFAULT_RETRY_ATTEMPTS: usize = 5;

/// Default number of search pages fetched concurrently per batch.
pub const DEFAULT_SLICE_WIDTH: usize = 10;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default User-Agent header value for all requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Retry backoff shape. The attempt count is configurable; the curve is not.
/// Initial retry delay in milliseconds.
pub const RETRY_INITIAL_DELAY_MS: u64 = 200;
/// Backoff multiplier applied to the delay after each attempt.
pub const RETRY_FACTOR: u64 = 2;
/// Ceiling on a single retry delay in seconds.
pub const RETRY_MAX_DELAY_SECS: u64 = 10;
