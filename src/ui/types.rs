use std::sync::{Arc, Mutex};

use chrono::Local;

pub const MAX_LOG_LINES: usize = 300;

/// Bounded list of recent log lines; the oldest line is dropped once full.
///
/// Clones share the same lines, so the history subscriber can append to it.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a timestamped line, dropping the oldest past capacity.
    pub fn push(&self, msg: impl Into<String>) {
        let line = format!("{} {}", Local::now().format("%H:%M:%S"), msg.into());
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(line);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}
