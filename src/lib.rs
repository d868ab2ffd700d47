//! Boxed console logger.
//!
//! Renders each record as a bordered, colorized block on stdout. Debug, info
//! and error records are shown in development mode; production records only
//! outside it.
//!
//! ```no_run
//! use boxlog::Logger;
//!
//! let logger = Logger::new(true);
//! logger.info("Hello\nWorld")?;
//! logger.debug_with("state", &serde_json::json!({ "retries": 3 }))?;
//! # Ok::<(), boxlog::LogError>(())
//! ```

pub mod config;
pub mod logger;
pub mod observability;

pub use config::LoggerConfig;
pub use logger::global::{
    debug, debug_with, error, error_with, global, info, info_with, init, production,
    production_with,
};
pub use logger::{Clock, LocalClock, LogError, Logger, MemorySink, OutputSink, Severity, StdoutSink};
