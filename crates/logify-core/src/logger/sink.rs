//! Console sinks

use std::fmt::Debug;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for rendered console lines.
///
/// Writing is infallible from the logger's point of view; a sink that
/// cannot write drops the line.
pub trait ConsoleSink: Send + Sync + Debug {
    fn write_line(&self, line: &str);
}

/// Standard output, one locked write per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}").ok();
    }
}

/// In-memory sink that keeps every line it receives.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .map(|mut lines| lines.push(line.to_string()))
            .ok();
    }
}
