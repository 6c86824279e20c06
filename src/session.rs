//! Session bootstrap.
//!
//! The search endpoint refuses queries without an anti-automation session
//! token, delivered as a cookie on the search base page. One GET before the
//! crawl obtains it; the value is then passed along as a query parameter on
//! every search request (and the client's cookie jar carries the cookie
//! itself).

use log::debug;

use crate::config::Settings;
use crate::error_handling::CrawlError;
use crate::transport::RetryingTransport;

/// Acquires the session token required by all search requests.
///
/// # Errors
///
/// - [`CrawlError::Connectivity`] if the bootstrap request cannot complete
///   after retries. The crawl aborts.
/// - [`CrawlError::MissingSessionCookie`] if the response succeeds but lacks
///   the configured cookie. Also fatal, since no search request can be made
///   without the token.
pub async fn acquire_session(
    transport: &RetryingTransport,
    settings: &Settings,
) -> Result<String, CrawlError> {
    let response = transport.get(&settings.search_base_url).await?;

    let token = response
        .cookies()
        .find(|cookie| cookie.name() == settings.session_cookie)
        .map(|cookie| cookie.value().to_string());

    match token {
        Some(token) => {
            debug!("Session cookie '{}' acquired", settings.session_cookie);
            Ok(token)
        }
        None => Err(CrawlError::MissingSessionCookie(
            settings.session_cookie.clone(),
        )),
    }
}
