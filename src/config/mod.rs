//! Crawl configuration.
//!
//! This module provides:
//! - The immutable [`Settings`] value object and its validation
//! - Compiled-in defaults and retry/backoff constants

mod constants;
mod types;

pub use constants::*;
pub use types::{JsonFields, Selectors, Settings, SettingsError};
