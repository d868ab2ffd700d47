//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loading, env overrides, gated-off records
//!     → tracing events
//!     → logging.rs (fmt layer on stderr, filtered by RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Diagnostics go to stderr so they never mix with boxed blocks on stdout
//! - Installing a subscriber is left to binaries; the library only emits events

pub mod logging;

pub use logging::init_tracing;
