//! In-memory capture sink
//!
//! Records console emissions instead of printing them, so tests (both this
//! crate's and a host application's) can assert on logging behavior.

use super::ConsoleSink;
use crate::core::log_level::LogLevel;
use parking_lot::Mutex;
use serde_json::Value;

/// One captured console emission
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub message: String,
    pub context: Option<Value>,
}

/// Console sink that records emissions in memory
#[derive(Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Captured lines at the given level, in emission order
    pub fn lines_at(&self, level: LogLevel) -> Vec<CapturedLine> {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.level == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear()
    }
}

impl ConsoleSink for MemoryConsole {
    fn emit(&self, level: LogLevel, message: &str, context: Option<&Value>) {
        self.lines.lock().push(CapturedLine {
            level,
            message: message.to_string(),
            context: context.cloned(),
        });
    }
}
