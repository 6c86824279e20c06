//! Configuration types.
//!
//! This module defines the immutable settings value object consumed by every
//! crawl component, and its startup validation.

use scraper::Selector;
use thiserror::Error;
use url::Url;

use crate::config::constants::*;

/// Errors detected while validating a [`Settings`] value.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A configured base URL does not parse.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// The underlying parse error.
        source: url::ParseError,
    },

    /// A configured CSS selector does not parse.
    #[error("invalid CSS selector '{selector}' for {context}")]
    InvalidSelector {
        /// The offending selector string.
        selector: String,
        /// What the selector is used for.
        context: &'static str,
    },

    /// The alias-history URL template has no `{}` placeholder for the id path.
    #[error("nickname history URL template '{0}' has no '{{}}' placeholder")]
    MissingPlaceholder(String),

    /// The session cookie name is empty.
    #[error("session cookie name must not be empty")]
    EmptyCookieName,

    /// The slice width is zero; at least one page per batch is required.
    #[error("slice width must be at least 1")]
    ZeroSliceWidth,

    /// The retry attempt count is zero; at least one attempt is required.
    #[error("retry attempt count must be at least 1")]
    ZeroRetryAttempts,
}

/// CSS selector expressions for HTML extraction.
#[derive(Debug, Clone)]
pub struct Selectors {
    /// Matches one profile card on a search-results page.
    pub profile_card: String,
    /// Matches the profile link inside a card.
    pub profile_link: String,
    /// Matches the description block on a profile page.
    pub description: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            profile_card: DEFAULT_PROFILE_CARD_SELECTOR.to_string(),
            profile_link: DEFAULT_PROFILE_LINK_SELECTOR.to_string(),
            description: DEFAULT_DESCRIPTION_SELECTOR.to_string(),
        }
    }
}

/// JSON field names of the remote payloads.
#[derive(Debug, Clone)]
pub struct JsonFields {
    /// Search envelope field carrying the profile-card HTML fragment.
    pub html: String,
    /// Search envelope field carrying the total match count.
    pub result_count: String,
    /// Alias-history entry field carrying the nickname.
    pub nickname: String,
}

impl Default for JsonFields {
    fn default() -> Self {
        Self {
            html: DEFAULT_HTML_FIELD.to_string(),
            result_count: DEFAULT_RESULT_COUNT_FIELD.to_string(),
            nickname: DEFAULT_NICKNAME_FIELD.to_string(),
        }
    }
}

/// Crawl configuration.
///
/// Constructed programmatically by the caller (there is no file or environment
/// loading here), validated once by [`Crawler::new`](crate::Crawler::new), and
/// treated as read-only for the crawl's lifetime.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the paginated search endpoint.
    pub search_base_url: String,
    /// Prefix shared by profile links; the remainder is the profile id path.
    pub profile_base_url: String,
    /// Alias-history URL template; `{}` receives the profile id path.
    pub nickname_history_url: String,
    /// Name of the session cookie the search endpoint requires.
    pub session_cookie: String,
    /// Maximum retries per request after a transient failure.
    pub retry_attempts: usize,
    /// Number of search pages fetched concurrently per batch.
    pub slice_width: usize,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// User-Agent header value.
    pub user_agent: String,
    /// CSS selectors for card, link, and description extraction.
    pub selectors: Selectors,
    /// JSON field names of the search envelope and alias-history payloads.
    pub fields: JsonFields,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            nickname_history_url: DEFAULT_NICKNAME_HISTORY_URL.to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            slice_width: DEFAULT_SLICE_WIDTH,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            selectors: Selectors::default(),
            fields: JsonFields::default(),
        }
    }
}

impl Settings {
    /// Validates the settings.
    ///
    /// Checks that base URLs parse, selectors compile, the alias-history
    /// template has its placeholder, and the numeric knobs are non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] encountered.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for url in [&self.search_base_url, &self.profile_base_url] {
            Url::parse(url).map_err(|source| SettingsError::InvalidUrl {
                url: url.clone(),
                source,
            })?;
        }

        if !self.nickname_history_url.contains("{}") {
            return Err(SettingsError::MissingPlaceholder(
                self.nickname_history_url.clone(),
            ));
        }

        for (selector, context) in [
            (&self.selectors.profile_card, "profile card extraction"),
            (&self.selectors.profile_link, "profile link extraction"),
            (&self.selectors.description, "description extraction"),
        ] {
            if Selector::parse(selector).is_err() {
                return Err(SettingsError::InvalidSelector {
                    selector: selector.clone(),
                    context,
                });
            }
        }

        if self.session_cookie.is_empty() {
            return Err(SettingsError::EmptyCookieName);
        }
        if self.slice_width == 0 {
            return Err(SettingsError::ZeroSliceWidth);
        }
        if self.retry_attempts == 0 {
            return Err(SettingsError::ZeroRetryAttempts);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_search_url_rejected() {
        let settings = Settings {
            search_base_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let settings = Settings {
            selectors: Selectors {
                profile_card: ":::".to_string(),
                ..Selectors::default()
            },
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidSelector {
                context: "profile card extraction",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let settings = Settings {
            nickname_history_url: "https://example.com/aliases/".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::MissingPlaceholder(_))
        ));
    }

    #[test]
    fn test_zero_slice_width_rejected() {
        let settings = Settings {
            slice_width: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroSliceWidth)
        ));
    }

    #[test]
    fn test_zero_retry_attempts_rejected() {
        let settings = Settings {
            retry_attempts: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroRetryAttempts)
        ));
    }
}
