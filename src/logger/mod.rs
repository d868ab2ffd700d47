//! Boxed console logger.
//!
//! # Data Flow
//! ```text
//! caller → Logger::{debug,info,error,production}[_with]
//!     → Severity::is_visible(dev_mode)   (suppressed records stop here)
//!     → render::serialize_data           (LogError::Serialization)
//!     → clock.rs (HH:mm:ss)
//!     → render.rs (bordered block)
//!     → sink.rs (one write per block)    (LogError::Output)
//! ```
//!
//! # Design Decisions
//! - The development flag is injected at construction, never read from the
//!   environment while logging
//! - Each call is stateless; the logger only holds immutable settings
//! - The caller location comes from `#[track_caller]`

pub mod clock;
pub mod error;
pub mod global;
pub mod render;
pub mod severity;
pub mod sink;
pub mod style;

use std::panic::Location;

use serde::Serialize;

use crate::config::{ConfigError, LoggerConfig};
pub use clock::{Clock, FixedClock, LocalClock};
pub use error::LogError;
pub use render::{Record, RenderOptions};
pub use severity::Severity;
pub use sink::{MemorySink, OutputSink, StdoutSink};
pub use style::StyleTable;

/// Renders records into boxed blocks and writes them to a sink.
#[derive(Debug, Clone)]
pub struct Logger<S = StdoutSink, C = LocalClock> {
    dev_mode: bool,
    options: RenderOptions,
    sink: S,
    clock: C,
}

impl Logger {
    /// Logger over stdout and the local clock with default rendering.
    pub fn new(dev_mode: bool) -> Self {
        Self {
            dev_mode,
            options: RenderOptions::default(),
            sink: StdoutSink,
            clock: LocalClock,
        }
    }

    /// Logger over stdout built from a configuration.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        let options = config
            .render_options()
            .map_err(|e| ConfigError::Validation(vec![e]))?;
        Ok(Self::new(config.dev_mode).with_options(options))
    }
}

impl<S, C> Logger<S, C> {
    pub fn with_sink<S2: OutputSink>(self, sink: S2) -> Logger<S2, C> {
        Logger {
            dev_mode: self.dev_mode,
            options: self.options,
            sink,
            clock: self.clock,
        }
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> Logger<S, C2> {
        Logger {
            dev_mode: self.dev_mode,
            options: self.options,
            sink: self.sink,
            clock,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }
}

impl<S: OutputSink, C: Clock> Logger<S, C> {
    /// Emit a record of any severity, with optional auxiliary data.
    ///
    /// Nothing is serialized or written when the severity is gated off.
    #[track_caller]
    pub fn log<T: Serialize + ?Sized>(
        &self,
        severity: Severity,
        message: &str,
        data: Option<&T>,
    ) -> Result<(), LogError> {
        let caller = Location::caller();
        if !severity.is_visible(self.dev_mode) {
            tracing::trace!(%severity, dev_mode = self.dev_mode, "record suppressed");
            return Ok(());
        }
        let data = data.map(render::serialize_data).transpose()?;
        self.emit(severity, message, data, caller)
    }

    #[track_caller]
    pub fn debug(&self, message: &str) -> Result<(), LogError> {
        self.log::<()>(Severity::Debug, message, None)
    }

    #[track_caller]
    pub fn info(&self, message: &str) -> Result<(), LogError> {
        self.log::<()>(Severity::Info, message, None)
    }

    #[track_caller]
    pub fn error(&self, message: &str) -> Result<(), LogError> {
        self.log::<()>(Severity::Error, message, None)
    }

    #[track_caller]
    pub fn production(&self, message: &str) -> Result<(), LogError> {
        self.log::<()>(Severity::Production, message, None)
    }

    #[track_caller]
    pub fn debug_with<T: Serialize + ?Sized>(
        &self,
        message: &str,
        data: &T,
    ) -> Result<(), LogError> {
        self.log(Severity::Debug, message, Some(data))
    }

    #[track_caller]
    pub fn info_with<T: Serialize + ?Sized>(
        &self,
        message: &str,
        data: &T,
    ) -> Result<(), LogError> {
        self.log(Severity::Info, message, Some(data))
    }

    #[track_caller]
    pub fn error_with<T: Serialize + ?Sized>(
        &self,
        message: &str,
        data: &T,
    ) -> Result<(), LogError> {
        self.log(Severity::Error, message, Some(data))
    }

    #[track_caller]
    pub fn production_with<T: Serialize + ?Sized>(
        &self,
        message: &str,
        data: &T,
    ) -> Result<(), LogError> {
        self.log(Severity::Production, message, Some(data))
    }

    fn emit(
        &self,
        severity: Severity,
        message: &str,
        data: Option<String>,
        caller: &'static Location<'static>,
    ) -> Result<(), LogError> {
        let record = Record {
            severity,
            message,
            timestamp: self.clock.timestamp(),
            caller: Some(caller),
            data,
        };
        let mut block = render::render(&record, &self.options);
        block.push('\n');
        self.sink.write_block(&block)?;
        Ok(())
    }
}
