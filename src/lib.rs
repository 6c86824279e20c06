//! nick_trace library: concurrent profile-search crawling
//!
//! This library crawls a paginated community search endpoint for profile
//! records matching a nickname, enriches each match with the profile's
//! free-text description and alias history, and hands back a flat set of
//! rows. Rendering, configuration loading, and report writing are the
//! caller's business; the crawl core only talks to them through the
//! [`ProgressSink`] and [`EventSink`] interfaces and the returned
//! [`CrawlResult`].
//!
//! # Example
//!
//! ```no_run
//! use nick_trace::{Crawler, NullProgress, Settings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let crawler = Crawler::new(Settings::default())?;
//! let stop = crawler.stop_handle(); // hand to a UI cancel button
//! # drop(stop);
//! let outcome = crawler.run("PlayerOne", &NullProgress).await;
//! # drop(outcome);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod crawler;
mod error_handling;
pub mod events;
mod fetch;
pub mod initialization;
mod models;
mod parse;
mod scheduler;
mod session;
mod transport;

// Re-export public API
pub use config::{JsonFields, Selectors, Settings, SettingsError};
pub use crawler::{CrawlOutcome, Crawler, StopHandle};
pub use error_handling::{CrawlError, InitializationError};
pub use events::{EventLevel, EventSink, LogEventSink, NullProgress, ProgressSink};
pub use models::{CrawlResult, ProfileRow, ProfileStub};
pub use parse::{parse_preview, PreviewInfo};
