//! Console output sinks

mod memory;
mod terminal;

pub use memory::{CapturedLine, MemoryConsole};
pub use terminal::TerminalConsole;

use crate::core::log_level::LogLevel;
use serde_json::Value;

/// Console destination for formatted log lines
///
/// The logger hands over the fully prefixed line on the channel matching
/// its severity, with the raw context as a separate argument. Rendering
/// the context is the sink's responsibility.
pub trait ConsoleSink: Send + Sync {
    fn emit(&self, level: LogLevel, message: &str, context: Option<&Value>);
}
