//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Settings;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from settings
/// - Per-request timeout from settings
/// - Cookie store enabled, so the bootstrap session cookie rides along on
///   every subsequent request
///
/// The client is shared read-concurrently by all in-flight tasks; connection
/// pooling is internal to it.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(settings: &Settings) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .user_agent(settings.user_agent.clone())
        .cookie_store(true)
        .build()?;
    Ok(Arc::new(client))
}
