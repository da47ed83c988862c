//! In-memory capture of diagnostic log output.
//!
//! The terminal belongs to the UI while it runs, so tracing output is
//! written into a fixed-capacity ring buffer instead. The log pane reads
//! the tail of the buffer and `--dump-log` writes it to a file on exit.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::writer::MakeWriter;

/// Default maximum buffer size: 1 MiB
pub const DEFAULT_MAX_BYTES: usize = 1024 * 1024;

/// Shared handle to the captured log. Clones share one buffer.
#[derive(Clone)]
pub struct LogBuffer {
    ring: Arc<Mutex<RingBuffer>>,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_BYTES)
    }

    pub fn with_capacity(max_bytes: usize) -> Self {
        Self {
            ring: Arc::new(Mutex::new(RingBuffer::new(max_bytes))),
        }
    }

    /// Writer factory for `tracing_subscriber::fmt().with_writer(..)`.
    pub fn make_writer(&self) -> LogMakeWriter {
        LogMakeWriter {
            ring: Arc::clone(&self.ring),
        }
    }

    pub fn snapshot(&self) -> LogSnapshot {
        LogSnapshot {
            bytes: self.lock().snapshot_bytes(),
        }
    }

    /// The last `n` complete or partial lines, oldest first.
    pub fn tail_lines(&self, n: usize) -> Vec<String> {
        let snapshot = self.snapshot();
        let text = snapshot.as_str_lossy();
        let mut lines: Vec<String> = text
            .lines()
            .rev()
            .take(n)
            .map(str::to_string)
            .collect();
        lines.reverse();
        lines
    }

    // A writer that panicked mid-push leaves the ring consistent, so a
    // poisoned lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, RingBuffer> {
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Clone)]
pub struct LogMakeWriter {
    ring: Arc<Mutex<RingBuffer>>,
}

impl<'a> MakeWriter<'a> for LogMakeWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            ring: Arc::clone(&self.ring),
        }
    }
}

/// Writer that appends to the ring buffer.
pub struct LogWriter {
    ring: Arc<Mutex<RingBuffer>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.ring.lock().unwrap_or_else(PoisonError::into_inner);
        guard.push_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fixed-capacity byte ring that evicts the oldest bytes when full.
struct RingBuffer {
    max: usize,
    buf: VecDeque<u8>,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            max: capacity,
            buf: VecDeque::new(),
        }
    }

    fn push_bytes(&mut self, data: &[u8]) {
        if data.is_empty() || self.max == 0 {
            return;
        }

        // Chunk at least as large as the ring: keep only its tail.
        if data.len() >= self.max {
            self.buf.clear();
            self.buf.extend(&data[data.len() - self.max..]);
            return;
        }

        let overflow = (self.buf.len() + data.len()).saturating_sub(self.max);
        if overflow > 0 {
            self.buf.drain(..overflow);
        }
        self.buf.extend(data);
    }

    fn snapshot_bytes(&self) -> Vec<u8> {
        self.buf.iter().copied().collect()
    }
}

/// Point-in-time copy of the captured log.
pub struct LogSnapshot {
    bytes: Vec<u8>,
}

impl LogSnapshot {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn save_to_path(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.as_bytes())
    }
}
