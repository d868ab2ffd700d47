//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (border width)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::LoggerConfig;

/// Widest border accepted.
pub const MAX_BOX_WIDTH: usize = 1024;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Border width must be in `1..=MAX_BOX_WIDTH`.
pub fn check_box_width(width: usize) -> Result<(), ValidationError> {
    if width == 0 || width > MAX_BOX_WIDTH {
        return Err(ValidationError {
            field: "box_width",
            message: format!("must be between 1 and {}, got {}", MAX_BOX_WIDTH, width),
        });
    }
    Ok(())
}

pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = check_box_width(config.box_width) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn test_width_bounds() {
        let zero = LoggerConfig { box_width: 0, ..LoggerConfig::default() };
        let errors = validate_config(&zero).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "box_width");

        let wide = LoggerConfig { box_width: MAX_BOX_WIDTH + 1, ..LoggerConfig::default() };
        assert!(validate_config(&wide).is_err());
    }
}
