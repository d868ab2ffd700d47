//! Wall-clock source for block timestamps.

use chrono::Local;

/// Supplies the `HH:mm:ss` timestamp shown in the header.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

/// Clock frozen at a given timestamp string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
