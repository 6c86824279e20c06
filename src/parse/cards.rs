//! Profile card and description extraction.
//!
//! `scraper::Html` is not `Send`, so callers must run these functions inside
//! a block scope and only `.await` after the parsed document is dropped.

use scraper::Html;

use crate::config::Settings;
use crate::models::ProfileStub;
use crate::parse::selector::parse_selector_with_fallback;

/// Counts the profile cards in a search-results HTML fragment.
///
/// Used by page-count discovery to learn the per-page capacity.
pub fn count_cards(html_fragment: &str, settings: &Settings) -> usize {
    let document = Html::parse_fragment(html_fragment);
    let card_selector =
        parse_selector_with_fallback(&settings.selectors.profile_card, "profile card extraction");
    document.select(&card_selector).count()
}

/// Extracts profile stubs from a search-results HTML fragment.
///
/// Cards without a profile link are skipped: there is nothing to enrich
/// without a URL, and every output row must carry one.
pub fn extract_stubs(html_fragment: &str, settings: &Settings) -> Vec<ProfileStub> {
    let document = Html::parse_fragment(html_fragment);
    let card_selector =
        parse_selector_with_fallback(&settings.selectors.profile_card, "profile card extraction");
    let link_selector =
        parse_selector_with_fallback(&settings.selectors.profile_link, "profile link extraction");
    let icon_selector = parse_selector_with_fallback("img", "country icon probe");

    document
        .select(&card_selector)
        .filter_map(|card| {
            let link = card.select(&link_selector).next()?;
            let profile_url = link.value().attr("href")?.to_string();
            if profile_url.is_empty() {
                return None;
            }
            let visible_nickname = link.text().collect::<String>().trim().to_string();
            let preview_text = card.text().collect::<String>();
            let has_country_icon = card.select(&icon_selector).next().is_some();
            let profile_id_path = profile_id_path(&profile_url, &settings.profile_base_url);

            Some(ProfileStub {
                profile_url,
                preview_text,
                has_country_icon,
                visible_nickname,
                profile_id_path,
            })
        })
        .collect()
}

/// Extracts the free-text description from a profile page.
///
/// Returns `None` when the description block is absent or empty.
pub fn extract_description(html_page: &str, settings: &Settings) -> Option<String> {
    let document = Html::parse_document(html_page);
    let selector =
        parse_selector_with_fallback(&settings.selectors.description, "description extraction");
    let block = document.select(&selector).next()?;
    let text = block.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Strips the configured profile base URL from a profile link, leaving the id
/// path that keys the alias-history endpoint (e.g. `id/somebody`).
///
/// Splits at the last occurrence of the base so a pathological nickname
/// containing the base URL cannot shift the boundary.
fn profile_id_path(profile_url: &str, profile_base_url: &str) -> String {
    profile_url
        .rsplit_once(profile_base_url)
        .map(|(_, tail)| tail.to_string())
        .unwrap_or_else(|| profile_url.to_string())
}
