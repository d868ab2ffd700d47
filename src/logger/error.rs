//! Errors raised by logging calls.

use thiserror::Error;

/// Errors that can occur while emitting a log record.
///
/// Neither variant leaves a partial block behind: serialization runs before
/// anything is written, and the block is written in a single call.
#[derive(Debug, Error)]
pub enum LogError {
    /// Auxiliary data could not be rendered as JSON.
    #[error("failed to serialize log data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The output sink rejected the write.
    #[error("failed to write log block: {0}")]
    Output(#[from] std::io::Error),
}
