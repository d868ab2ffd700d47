//! ANSI style codes, icons and box glyphs.

use super::severity::Severity;

pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';

/// Default number of horizontal rule characters in a border.
pub const BOX_WIDTH: usize = 80;

/// Style codes used by the renderer.
///
/// With ANSI disabled every code is the empty string, so the layout is
/// unchanged and only the escapes disappear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTable {
    pub reset: &'static str,
    pub info: &'static str,
    pub error: &'static str,
    pub debug: &'static str,
    pub production: &'static str,
    pub bold: &'static str,
    pub json: &'static str,
    pub border: &'static str,
}

impl StyleTable {
    pub const ANSI: StyleTable = StyleTable {
        reset: "\x1b[0m",
        info: "\x1b[34m",
        error: "\x1b[31m",
        debug: "\x1b[32m",
        production: "\x1b[32m",
        bold: "\x1b[1m",
        json: "\x1b[33m",
        border: "\x1b[97m",
    };

    pub const PLAIN: StyleTable = StyleTable {
        reset: "",
        info: "",
        error: "",
        debug: "",
        production: "",
        bold: "",
        json: "",
        border: "",
    };

    pub fn new(ansi: bool) -> Self {
        if ansi {
            Self::ANSI
        } else {
            Self::PLAIN
        }
    }

    pub fn color(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Info => self.info,
            Severity::Error => self.error,
            Severity::Debug => self.debug,
            Severity::Production => self.production,
        }
    }
}

/// Icon shown in the header line.
pub fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "📝",
        Severity::Error => "🚨",
        Severity::Debug => "🔎",
        Severity::Production => "🔬",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_table_is_empty() {
        let plain = StyleTable::new(false);
        for severity in Severity::ALL {
            assert_eq!(plain.color(severity), "");
        }
        assert_eq!(plain.border, "");
    }

    #[test]
    fn test_every_severity_has_a_color() {
        let ansi = StyleTable::new(true);
        for severity in Severity::ALL {
            assert!(ansi.color(severity).starts_with("\x1b["));
            assert_ne!(ansi.color(severity), ansi.reset);
        }
    }
}
