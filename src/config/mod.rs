//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → schema.rs (environment overrides: BOXLOG_DEV, NO_COLOR)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig (validated, immutable)
//!     → Logger::from_config
//! ```
//!
//! # Design Decisions
//! - Resolved once at startup; the logger never re-reads it
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::LoggerConfig;
pub use validation::{validate_config, ValidationError};
