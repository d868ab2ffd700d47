//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;
use crate::config::validation::{validate_config, ValidationError};
use crate::logger::render::RenderOptions;
use crate::logger::style::{StyleTable, BOX_WIDTH};

/// Environment variable overriding `dev_mode`.
pub const ENV_DEV_MODE: &str = "BOXLOG_DEV";

/// Any non-empty value disables ANSI styling (<https://no-color.org>).
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Root configuration for the logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Development mode: debug/info/error emit, production is suppressed.
    pub dev_mode: bool,

    /// Number of horizontal rule characters in the top and bottom borders.
    pub box_width: usize,

    /// Emit ANSI color and style codes.
    pub ansi: bool,

    /// Show the call site (`file:line`) in the header.
    pub show_caller: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            dev_mode: cfg!(debug_assertions),
            box_width: BOX_WIDTH,
            ansi: true,
            show_caller: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults with process environment overrides, validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DEV_MODE) {
            self.dev_mode = parse_bool(&value).ok_or_else(|| ConfigError::Env {
                var: ENV_DEV_MODE,
                value: value.clone(),
            })?;
            tracing::debug!(dev_mode = self.dev_mode, "dev_mode overridden from environment");
        }

        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            self.ansi = false;
            tracing::debug!("ANSI styling disabled by NO_COLOR");
        }

        Ok(())
    }

    pub fn render_options(&self) -> Result<RenderOptions, ValidationError> {
        Ok(RenderOptions::new(self.box_width)?
            .with_styles(StyleTable::new(self.ansi))
            .with_show_caller(self.show_caller))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_dev_override() {
        let mut config = LoggerConfig { dev_mode: false, ..LoggerConfig::default() };
        config.apply_overrides_from(env(&[(ENV_DEV_MODE, "TRUE")])).unwrap();
        assert!(config.dev_mode);

        config.apply_overrides_from(env(&[(ENV_DEV_MODE, "off")])).unwrap();
        assert!(!config.dev_mode);
    }

    #[test]
    fn test_invalid_dev_override() {
        let mut config = LoggerConfig::default();
        let err = config
            .apply_overrides_from(env(&[(ENV_DEV_MODE, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: ENV_DEV_MODE, .. }));
    }

    #[test]
    fn test_no_color() {
        let mut config = LoggerConfig::default();
        config.apply_overrides_from(env(&[(ENV_NO_COLOR, "")])).unwrap();
        assert!(config.ansi);

        config.apply_overrides_from(env(&[(ENV_NO_COLOR, "1")])).unwrap();
        assert!(!config.ansi);
        assert_eq!(config.render_options().unwrap().styles(), &StyleTable::PLAIN);
    }

    #[test]
    fn test_render_options_reject_zero_width() {
        let config = LoggerConfig { box_width: 0, ..LoggerConfig::default() };
        let err = config.render_options().unwrap_err();
        assert_eq!(err.field, "box_width");
    }
}
