//! Output sinks.
//!
//! A sink receives each rendered block in exactly one call. [`StdoutSink`]
//! holds the stdout lock for the whole write so concurrent blocks never
//! interleave line by line.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for rendered blocks.
pub trait OutputSink {
    fn write_block(&self, block: &str) -> io::Result<()>;
}

/// Process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_block(&self, block: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(block.as_bytes())?;
        out.flush()
    }
}

/// Captures blocks in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    blocks: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every block written so far.
    pub fn blocks(&self) -> Vec<String> {
        self.blocks.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of writes received.
    pub fn len(&self) -> usize {
        self.blocks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputSink for MemorySink {
    fn write_block(&self, block: &str) -> io::Result<()> {
        self.blocks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(block.to_string());
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Arc<S> {
    fn write_block(&self, block: &str) -> io::Result<()> {
        (**self).write_block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        clone.write_block("a").unwrap();
        clone.write_block("b").unwrap();
        assert_eq!(sink.blocks(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(sink.len(), 2);
    }
}
