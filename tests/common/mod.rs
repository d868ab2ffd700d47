//! Shared helpers for logger integration tests.

use boxlog::logger::{FixedClock, MemorySink, RenderOptions, StyleTable};
use boxlog::Logger;

pub const TIMESTAMP: &str = "12:34:56";

/// Logger writing to a shared in-memory sink with a frozen clock.
pub fn capture(dev_mode: bool) -> (Logger<MemorySink, FixedClock>, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::new(dev_mode)
        .with_sink(sink.clone())
        .with_clock(FixedClock::new(TIMESTAMP));
    (logger, sink)
}

/// Same as [`capture`] but without ANSI codes.
#[allow(dead_code)]
pub fn capture_plain(dev_mode: bool) -> (Logger<MemorySink, FixedClock>, MemorySink) {
    let (logger, sink) = capture(dev_mode);
    let logger = logger.with_options(RenderOptions::default().with_styles(StyleTable::PLAIN));
    (logger, sink)
}

/// Remove every `ESC [ ... m` sequence.
#[allow(dead_code)]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Bordered message lines of an unstyled block, without the `│ ` prefix.
#[allow(dead_code)]
pub fn content_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .skip_while(|line| *line != "│")
        .skip(1)
        .take_while(|line| line.starts_with("│ "))
        .map(|line| line["│ ".len()..].to_string())
        .collect()
}
