//! Collaborator interfaces for progress and event reporting.
//!
//! The crawl core never references a presentation type. A host that wants a
//! progress bar or a log pane implements [`ProgressSink`] / [`EventSink`] and
//! hands them in; everything else gets the `log`-forwarding defaults.

use log::{error, info};

/// Severity of a crawl event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    /// Routine progress information.
    Info,
    /// A unit of work completed (e.g. one profile collected).
    Success,
    /// A diagnostic condition (missing resource, aborted crawl).
    Error,
}

/// Fire-and-forget event reporting. Implementations must not block the crawl.
pub trait EventSink: Send + Sync {
    /// Reports one event.
    fn event(&self, level: EventLevel, message: &str);
}

/// Receives fractional crawl progress in `[0, 1]`.
///
/// Invoked after each completed batch of pages. Values are monotonically
/// non-decreasing and reach exactly `1.0` on a successful crawl.
pub trait ProgressSink: Send + Sync {
    /// Reports cumulative progress.
    fn progress(&self, fraction: f64);
}

/// Default event sink forwarding to the `log` facade.
///
/// `Success` maps to `info!`; the distinction only matters to hosts that
/// render the two differently.
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn event(&self, level: EventLevel, message: &str) {
        match level {
            EventLevel::Info | EventLevel::Success => info!("{message}"),
            EventLevel::Error => error!("{message}"),
        }
    }
}

/// Progress sink that discards all updates.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn progress(&self, _fraction: f64) {}
}
