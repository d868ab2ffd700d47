//! Block rendering.
//!
//! # Layout
//! ```text
//!
//!
//! ┌────────────────────────────────────── (width × ─)
//! │ 🔎 [DEBUG] [12:34:56] [src/main.rs:10]
//! │
//! │ first message line
//! │ second message line
//!
//! │ Debug Content:
//! {
//!   "key": "value"
//! }
//! └────────────────────────────────────── (width × ─)
//! ```
//!
//! The data section only appears when auxiliary data was supplied. Rendering
//! is a pure function of the record and the options.

use std::fmt::Write as _;
use std::panic::Location;

use serde::Serialize;

use super::error::LogError;
use super::severity::Severity;
use super::style::{self, StyleTable, BOX_BOTTOM_LEFT, BOX_HORIZONTAL, BOX_TOP_LEFT, BOX_VERTICAL};
use crate::config::validation::{check_box_width, ValidationError};

/// Label preceding the serialized data.
pub const DATA_LABEL: &str = "Debug Content:";

/// Layout and styling knobs for [`render`].
///
/// The border width is only settable through [`RenderOptions::new`], which
/// rejects widths outside `1..=MAX_BOX_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    width: usize,
    styles: StyleTable,
    show_caller: bool,
}

impl RenderOptions {
    /// Default styling with a checked border width.
    pub fn new(width: usize) -> Result<Self, ValidationError> {
        check_box_width(width)?;
        Ok(Self { width, ..Self::default() })
    }

    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_show_caller(mut self, show_caller: bool) -> Self {
        self.show_caller = show_caller;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: style::BOX_WIDTH,
            styles: StyleTable::ANSI,
            show_caller: true,
        }
    }
}

/// A single log record, built per call and dropped after rendering.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub severity: Severity,
    pub message: &'a str,
    pub timestamp: String,
    pub caller: Option<&'static Location<'static>>,
    /// Pre-serialized auxiliary data (2-space indented JSON).
    pub data: Option<String>,
}

/// Serialize auxiliary data the way it appears in the block.
pub fn serialize_data<T: Serialize + ?Sized>(data: &T) -> Result<String, LogError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Render a record into a complete multi-line block.
pub fn render(record: &Record<'_>, options: &RenderOptions) -> String {
    let s = &options.styles;
    let color = s.color(record.severity);
    let rule: String = std::iter::repeat(BOX_HORIZONTAL).take(options.width).collect();
    let bar = format!("{}{}{}", s.border, BOX_VERTICAL, s.reset);

    let mut out = String::new();

    // write! into a String cannot fail
    let _ = writeln!(out, "\n\n{}{}{}{}", s.border, BOX_TOP_LEFT, rule, s.reset);

    let _ = write!(
        out,
        "{} {} {}[{}]{} {}[{}]{}",
        bar,
        style::icon(record.severity),
        color,
        record.severity,
        s.reset,
        s.border,
        record.timestamp,
        s.reset,
    );
    if options.show_caller {
        if let Some(caller) = record.caller {
            let _ = write!(out, " {}[{}:{}]{}", s.border, caller.file(), caller.line(), s.reset);
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{}", bar);

    for line in record.message.split('\n') {
        let _ = writeln!(out, "{} {}{}{}", bar, color, line, s.reset);
    }

    out.push('\n');

    if let Some(data) = &record.data {
        let _ = writeln!(out, "{} {}", bar, DATA_LABEL);
        let _ = writeln!(out, "{}{}{}{}", s.bold, s.json, data, s.reset);
    }

    let _ = writeln!(out, "{}{}{}{}", s.border, BOX_BOTTOM_LEFT, rule, s.reset);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> RenderOptions {
        RenderOptions::default().with_styles(StyleTable::PLAIN)
    }

    fn record(message: &str) -> Record<'_> {
        Record {
            severity: Severity::Info,
            message,
            timestamp: "09:05:01".to_string(),
            caller: None,
            data: None,
        }
    }

    #[test]
    fn test_plain_layout() {
        let block = render(&record("Hello\nWorld"), &plain());
        let rule = "─".repeat(80);
        let expected = format!(
            "\n\n┌{rule}\n│ 📝 [INFO] [09:05:01]\n│\n│ Hello\n│ World\n\n└{rule}\n"
        );
        assert_eq!(block, expected);
    }

    #[test]
    fn test_data_section() {
        let mut rec = record("Deployed");
        rec.data = Some(serialize_data(&json!({ "version": 2 })).unwrap());
        let block = render(&rec, &plain());
        assert!(block.contains("│ Debug Content:\n{\n  \"version\": 2\n}\n└"));
    }

    #[test]
    fn test_caller_rendered() {
        let mut rec = record("x");
        rec.caller = Some(Location::caller());
        let block = render(&rec, &plain());
        assert!(block.contains(&format!("[{}:", file!())));

        let hidden = render(&rec, &plain().with_show_caller(false));
        assert!(!hidden.contains(file!()));
    }

    #[test]
    fn test_custom_width() {
        let options = RenderOptions::new(10).unwrap().with_styles(StyleTable::PLAIN);
        let block = render(&record("x"), &options);
        assert!(block.contains(&format!("┌{}\n", "─".repeat(10))));
        assert!(block.ends_with(&format!("└{}\n", "─".repeat(10))));
    }

    #[test]
    fn test_width_out_of_range_rejected() {
        let err = RenderOptions::new(0).unwrap_err();
        assert_eq!(err.field, "box_width");
        assert!(RenderOptions::new(crate::config::validation::MAX_BOX_WIDTH + 1).is_err());
        assert_eq!(RenderOptions::new(1).unwrap().width(), 1);
    }

    #[test]
    fn test_ansi_colors_message_lines() {
        let mut rec = record("boom");
        rec.severity = Severity::Error;
        let block = render(&rec, &RenderOptions::default());
        assert!(block.contains("\x1b[97m│\x1b[0m \x1b[31mboom\x1b[0m\n"));
        assert!(block.contains("\x1b[31m[ERROR]\x1b[0m"));
    }

    #[test]
    fn test_non_string_keys_fail_to_serialize() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "pair");
        assert!(matches!(serialize_data(&map), Err(LogError::Serialization(_))));
    }
}
