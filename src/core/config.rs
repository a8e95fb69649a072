//! Logger configuration
//!
//! Every knob has a default, so `LoggerConfig::new()` alone yields a fully
//! usable console-only logger. The `with_*` methods overlay individual
//! settings onto the defaults.
//!
//! # Examples
//!
//! ```
//! use applog::{LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::new()
//!     .with_level(LogLevel::Debug)
//!     .with_file_logging(true)
//!     .with_max_backups(3);
//!
//! assert_eq!(config.level, LogLevel::Debug);
//! assert_eq!(config.max_file_size, 10 * 1024 * 1024);
//! ```

use super::log_level::LogLevel;

/// Default maximum size of the live log file before rotation (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of rotated backup files to keep
pub const DEFAULT_MAX_BACKUPS: usize = 5;

/// Default number of file writes between rotation size checks
pub const DEFAULT_ROTATION_CHECK_INTERVAL: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Minimum severity that produces output
    pub level: LogLevel,
    /// Whether log lines are also persisted to disk
    pub file_logging: bool,
    /// Live file size that triggers rotation, in bytes
    pub max_file_size: u64,
    /// Rotated backups kept as `<file>.1` through `<file>.<max_backups>`
    pub max_backups: usize,
    /// Postpone file setup until the first write that needs it
    pub defer_init: bool,
    /// File writes between rotation size checks; values <= 1 check every write
    pub rotation_check_interval: u64,
    /// Lines held in memory before an automatic flush; 0 writes through
    pub buffer_size: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file_logging: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_backups: DEFAULT_MAX_BACKUPS,
            defer_init: false,
            rotation_check_interval: DEFAULT_ROTATION_CHECK_INTERVAL,
            buffer_size: 0,
        }
    }
}

impl LoggerConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum output level
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable file persistence
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.file_logging = enabled;
        self
    }

    /// Set the rotation size threshold in bytes
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set how many rotated backups to keep
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, count: usize) -> Self {
        self.max_backups = count;
        self
    }

    /// Postpone file setup until the first write that needs it
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_defer_init(mut self, deferred: bool) -> Self {
        self.defer_init = deferred;
        self
    }

    /// Set the number of writes between rotation size checks
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_rotation_check_interval(mut self, writes: u64) -> Self {
        self.rotation_check_interval = writes;
        self
    }

    /// Set the in-memory buffer size in lines (0 disables buffering)
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_buffer_size(mut self, lines: usize) -> Self {
        self.buffer_size = lines;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new();
        assert_eq!(config.level, LogLevel::Info);
        assert!(!config.file_logging);
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert_eq!(config.max_backups, 5);
        assert!(!config.defer_init);
        assert_eq!(config.rotation_check_interval, 100);
        assert_eq!(config.buffer_size, 0);
    }

    #[test]
    fn test_overlay_leaves_other_fields_at_default() {
        let config = LoggerConfig::new()
            .with_level(LogLevel::Error)
            .with_buffer_size(16);

        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.buffer_size, 16);
        assert_eq!(config.max_backups, DEFAULT_MAX_BACKUPS);
        assert_eq!(config.rotation_check_interval, DEFAULT_ROTATION_CHECK_INTERVAL);
    }
}
