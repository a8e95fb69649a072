//! Terminal console sink

use super::ConsoleSink;
use crate::core::log_level::LogLevel;
use crate::core::serialize::serialize_context;
use colored::Colorize;
use serde_json::Value;

/// Console sink writing to the process's standard streams
///
/// Debug and info lines go to stdout, warn and error lines to stderr.
/// Context values are rendered on the lines following the message.
pub struct TerminalConsole {
    use_colors: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, level: LogLevel, message: &str) -> String {
        if self.use_colors {
            message.color(level.color_code()).to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for TerminalConsole {
    fn emit(&self, level: LogLevel, message: &str, context: Option<&Value>) {
        let line = self.render(level, message);
        match level {
            LogLevel::Warn | LogLevel::Error => {
                eprintln!("{}", line);
                if let Some(context) = context {
                    eprintln!("{}", serialize_context(context));
                }
            }
            LogLevel::Debug | LogLevel::Info => {
                println!("{}", line);
                if let Some(context) = context {
                    println!("{}", serialize_context(context));
                }
            }
        }
    }
}
