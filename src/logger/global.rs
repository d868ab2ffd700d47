//! Process-wide default logger and free-function entry points.
//!
//! The default logger is built once, on first use, from the environment
//! (`BOXLOG_DEV`, `NO_COLOR`) unless [`init`] installed one earlier.

use std::sync::{Arc, OnceLock};

use serde::Serialize;

use super::{LocalClock, LogError, Logger, OutputSink};
use crate::config::LoggerConfig;

/// Sink type held by the process-wide logger.
pub type SharedSink = Arc<dyn OutputSink + Send + Sync>;

static GLOBAL: OnceLock<Logger<SharedSink, LocalClock>> = OnceLock::new();

fn share<S>(logger: Logger<S, LocalClock>) -> Logger<SharedSink, LocalClock>
where
    S: OutputSink + Send + Sync + 'static,
{
    Logger {
        dev_mode: logger.dev_mode,
        options: logger.options,
        sink: Arc::new(logger.sink),
        clock: logger.clock,
    }
}

/// Install the process-wide logger.
///
/// Returns the logger back if one was already installed or used.
pub fn init<S>(logger: Logger<S, LocalClock>) -> Result<(), Logger<SharedSink, LocalClock>>
where
    S: OutputSink + Send + Sync + 'static,
{
    GLOBAL.set(share(logger))
}

/// The process-wide logger.
pub fn global() -> &'static Logger<SharedSink, LocalClock> {
    GLOBAL.get_or_init(|| {
        let logger = LoggerConfig::from_env()
            .and_then(|config| Logger::from_config(&config))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid logger environment, using defaults");
                Logger::new(LoggerConfig::default().dev_mode)
            });
        share(logger)
    })
}

#[track_caller]
pub fn debug(message: &str) -> Result<(), LogError> {
    global().debug(message)
}

#[track_caller]
pub fn info(message: &str) -> Result<(), LogError> {
    global().info(message)
}

#[track_caller]
pub fn error(message: &str) -> Result<(), LogError> {
    global().error(message)
}

#[track_caller]
pub fn production(message: &str) -> Result<(), LogError> {
    global().production(message)
}

#[track_caller]
pub fn debug_with<T: Serialize + ?Sized>(message: &str, data: &T) -> Result<(), LogError> {
    global().debug_with(message, data)
}

#[track_caller]
pub fn info_with<T: Serialize + ?Sized>(message: &str, data: &T) -> Result<(), LogError> {
    global().info_with(message, data)
}

#[track_caller]
pub fn error_with<T: Serialize + ?Sized>(message: &str, data: &T) -> Result<(), LogError> {
    global().error_with(message, data)
}

#[track_caller]
pub fn production_with<T: Serialize + ?Sized>(message: &str, data: &T) -> Result<(), LogError> {
    global().production_with(message, data)
}
