//! Profile enrichment.
//!
//! Turns a [`ProfileStub`] into a finished [`ProfileRow`] by fetching the
//! profile's free-text description and its alias history concurrently, then
//! merging both with the preview-derived location/name. Sub-fetch failures
//! degrade the affected field only; a row is never lost to a missing
//! description or alias history.

use log::debug;
use serde_json::Value;

use crate::error_handling::CrawlError;
use crate::events::EventLevel;
use crate::fetch::context::CrawlContext;
use crate::models::{ProfileRow, ProfileStub};
use crate::parse::{extract_description, parse_preview};

/// Enriches one profile stub into an output row.
///
/// The description and alias-history fetches run concurrently. When the alias
/// history comes back empty or missing, the visible search-result nickname is
/// substituted so the row's `nicknames` is never empty.
///
/// # Errors
///
/// Only connectivity loss and cancellation propagate; they abort the crawl.
pub async fn enrich_profile(
    ctx: &CrawlContext,
    stub: ProfileStub,
) -> Result<ProfileRow, CrawlError> {
    let (description, history) = tokio::try_join!(
        fetch_description(ctx, &stub.profile_url),
        fetch_nickname_history(ctx, &stub.profile_id_path),
    )?;

    let preview = parse_preview(&stub.preview_text, stub.has_country_icon);
    let nicknames = if history.is_empty() {
        vec![stub.visible_nickname]
    } else {
        history
    };

    ctx.events.event(
        EventLevel::Success,
        &format!("Collected profile {}", stub.profile_url),
    );

    Ok(ProfileRow {
        url: stub.profile_url,
        description,
        location: preview.location,
        name: preview.name,
        nicknames,
    })
}

/// Fetches the profile page and extracts its description block. Best-effort:
/// a missing page or absent block yields `None`.
async fn fetch_description(ctx: &CrawlContext, url: &str) -> Result<Option<String>, CrawlError> {
    let Some(body) = ctx.transport.fetch_text(url).await? else {
        return Ok(None);
    };
    Ok(extract_description(&body, &ctx.settings))
}

/// Fetches the alias history for a profile id path.
///
/// The endpoint answers a JSON array of objects carrying the configured
/// nickname field; entries missing the field are skipped. An unavailable
/// endpoint or non-array payload yields an empty history.
async fn fetch_nickname_history(
    ctx: &CrawlContext,
    id_path: &str,
) -> Result<Vec<String>, CrawlError> {
    let url = ctx.settings.nickname_history_url.replacen("{}", id_path, 1);
    let Some(payload) = ctx.transport.fetch_json(&url, &[]).await? else {
        return Ok(Vec::new());
    };

    let Some(entries) = payload.as_array() else {
        debug!("Alias history for {id_path} is not an array");
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|entry| {
            entry
                .get(&ctx.settings.fields.nickname)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .collect())
}
