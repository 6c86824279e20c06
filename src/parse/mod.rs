//! HTML and preview-text parsing.
//!
//! This module provides:
//! - Profile card and description extraction from HTML
//! - Preview text segmentation into location/display-name
//! - Safe CSS selector parsing

mod cards;
mod preview;
mod selector;

pub use cards::{count_cards, extract_description, extract_stubs};
pub use preview::{parse_preview, PreviewInfo};
pub use selector::parse_selector_with_fallback;
