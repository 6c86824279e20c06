//! Logger initialization.

use log::LevelFilter;

use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level.
///
/// Configures `env_logger` reading from the `RUST_LOG` environment variable
/// first, then overriding with the provided level. Noisy dependency modules
/// are filtered so parsing internals do not drown crawl output.
///
/// Optional: hosts with their own `log` implementation can skip this entirely;
/// the crawl only emits through the `log` facade and its [`EventSink`]
/// collaborator.
///
/// [`EventSink`]: crate::events::EventSink
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);

    builder.try_init()?;
    Ok(())
}
