//! Log severities and their visibility gate.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Error,
    Debug,
    /// Only emitted when development mode is off.
    Production,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Error,
        Severity::Debug,
        Severity::Production,
    ];

    /// Upper-case display name used in the block header.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Debug => "DEBUG",
            Severity::Production => "PRODUCTION",
        }
    }

    /// Whether a record of this severity is emitted in the given mode.
    pub fn is_visible(self, dev_mode: bool) -> bool {
        match self {
            Severity::Production => !dev_mode,
            Severity::Info | Severity::Error | Severity::Debug => dev_mode,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "error" => Ok(Severity::Error),
            "debug" => Ok(Severity::Debug),
            "production" | "prod" => Ok(Severity::Production),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
