//! Preview text segmentation.
//!
//! A search card's visible text holds the nickname, and optionally a display
//! name and/or a location, separated by tab runs. The source site's card
//! layout is inconsistent: with exactly two segments, only the presence of a
//! country-flag icon tells a location apart from a name.

/// Best-effort location/display-name pair derived from a card's preview text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewInfo {
    /// Location, if the card shows one.
    pub location: Option<String>,
    /// Display name, if the card shows one.
    pub name: Option<String>,
}

/// Parses a card's preview text into a [`PreviewInfo`].
///
/// Normalization: trim, drop newline and non-breaking-space characters, then
/// split on runs of tabs. Policy:
///
/// | segments | country icon | result |
/// |---|---|---|
/// | 1 | any | neither |
/// | 2 | yes | location = segment 2 |
/// | 2 | no | name = segment 2 |
/// | 3+ | any | name = segment 2, location = segment 3 |
pub fn parse_preview(text: &str, has_country_icon: bool) -> PreviewInfo {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\r' && *c != '\u{a0}')
        .collect();
    let segments: Vec<&str> = cleaned.split('\t').filter(|s| !s.is_empty()).collect();

    let mut info = PreviewInfo::default();
    match segments.len() {
        0 | 1 => {}
        2 if has_country_icon => info.location = Some(segments[1].to_string()),
        2 => info.name = Some(segments[1].to_string()),
        _ => {
            info.name = Some(segments[1].to_string());
            info.location = Some(segments[2].to_string());
        }
    }

    info
}
