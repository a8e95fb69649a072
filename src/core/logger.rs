//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_level::LogLevel,
    sanitize::sanitize_message,
    serialize::{error_details, serialize_context},
    stats::FileLogStats,
    timestamp::now_timestamp,
};
use crate::console::{ConsoleSink, TerminalConsole};
use crate::platform::Platform;
use crate::rotation::rotate_if_needed;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File name of the live log file inside the logs directory
pub const LOG_FILE_NAME: &str = "app.log";

/// Subdirectory of the platform base directory holding log files
pub const LOG_DIR_NAME: &str = "logs";

/// File-logging readiness of one logger instance
///
/// Setup is attempted at most once per instance. `Ready` carries the
/// resolved paths, so a log file path exists exactly when setup succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    /// Setup has not been attempted yet (deferred initialization)
    NotAttempted,
    /// Setup succeeded and file output is active
    Ready { dir: PathBuf, path: PathBuf },
    /// Setup failed; file logging is permanently off for this instance
    Disabled,
}

impl FileState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, FileState::Ready { .. })
    }
}

/// Mutable file-output state, guarded as one unit so initialization,
/// buffering, and the rotation sequence cannot interleave.
struct FileBackend {
    state: FileState,
    write_counter: u64,
    buffer: Vec<String>,
}

/// A module-scoped logger
///
/// Construction never fails and logging methods never return errors: any
/// file-system failure degrades the instance to console-only output and is
/// reported through the console sink's error channel. Methods take `&self`,
/// so an `Arc<Logger>` can be shared across threads.
///
/// # Example
///
/// ```
/// use applog::{FixedPaths, Logger, LoggerConfig, LogLevel};
/// use std::sync::Arc;
///
/// let platform = Arc::new(FixedPaths::new(std::env::temp_dir(), false));
/// let logger = Logger::new(
///     "auth",
///     LoggerConfig::new().with_level(LogLevel::Debug),
///     platform,
/// );
///
/// logger.info("service started");
/// assert_eq!(logger.module_name(), "auth");
/// ```
pub struct Logger {
    module: String,
    level: RwLock<LogLevel>,
    config: LoggerConfig,
    backend: Mutex<FileBackend>,
    stats: FileLogStats,
    platform: Arc<dyn Platform>,
    console: Arc<dyn ConsoleSink>,
}

impl Logger {
    /// Create a logger writing to the terminal console
    #[must_use]
    pub fn new(
        module: impl Into<String>,
        config: LoggerConfig,
        platform: Arc<dyn Platform>,
    ) -> Self {
        Self::with_console(module, config, platform, Arc::new(TerminalConsole::new()))
    }

    /// Create a logger with a custom console sink
    #[must_use]
    pub fn with_console(
        module: impl Into<String>,
        config: LoggerConfig,
        platform: Arc<dyn Platform>,
        console: Arc<dyn ConsoleSink>,
    ) -> Self {
        let logger = Self {
            module: module.into(),
            level: RwLock::new(config.level),
            backend: Mutex::new(FileBackend {
                state: FileState::NotAttempted,
                write_counter: 0,
                buffer: Vec::new(),
            }),
            stats: FileLogStats::new(),
            config,
            platform,
            console,
        };

        if logger.config.file_logging && !logger.config.defer_init {
            let mut backend = logger.backend.lock();
            logger.ensure_initialized(&mut backend);
        }

        logger
    }

    /// Get the module name passed at construction
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module
    }

    /// Get the current minimum output level
    #[must_use]
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Change the minimum output level
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Get the configuration this logger was constructed with
    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Get the current file-logging state
    #[must_use]
    pub fn file_state(&self) -> FileState {
        self.backend.lock().state.clone()
    }

    /// Get the live log file path, if file logging initialized successfully
    #[must_use]
    pub fn log_file_path(&self) -> Option<PathBuf> {
        match &self.backend.lock().state {
            FileState::Ready { path, .. } => Some(path.clone()),
            _ => None,
        }
    }

    /// Get the number of lines currently buffered in memory
    #[must_use]
    pub fn buffered_entries(&self) -> usize {
        self.backend.lock().buffer.len()
    }

    /// Get the file-output counters
    #[must_use]
    pub fn stats(&self) -> &FileLogStats {
        &self.stats
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.emit(level, message.as_ref(), None);
    }

    pub fn log_with(&self, level: LogLevel, message: impl AsRef<str>, context: Value) {
        self.emit(level, message.as_ref(), Some(&context));
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Debug, message.as_ref(), None);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Info, message.as_ref(), None);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Warn, message.as_ref(), None);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Error, message.as_ref(), None);
    }

    #[inline]
    pub fn debug_with(&self, message: impl AsRef<str>, context: Value) {
        self.emit(LogLevel::Debug, message.as_ref(), Some(&context));
    }

    #[inline]
    pub fn info_with(&self, message: impl AsRef<str>, context: Value) {
        self.emit(LogLevel::Info, message.as_ref(), Some(&context));
    }

    #[inline]
    pub fn warn_with(&self, message: impl AsRef<str>, context: Value) {
        self.emit(LogLevel::Warn, message.as_ref(), Some(&context));
    }

    #[inline]
    pub fn error_with(&self, message: impl AsRef<str>, context: Value) {
        self.emit(LogLevel::Error, message.as_ref(), Some(&context));
    }

    /// Log an error value at error level
    ///
    /// The error is normalized into `{name, message, stack}` context, with
    /// `stack` rendered from its `source()` chain.
    pub fn error_with_source<E>(&self, message: impl AsRef<str>, error: &E)
    where
        E: std::error::Error + ?Sized,
    {
        let details = error_details(error);
        self.emit(LogLevel::Error, message.as_ref(), Some(&details));
    }

    /// Write any buffered lines to disk
    ///
    /// Safe to call with an empty buffer (no-op, no write). Intended before
    /// process exit; buffered entries are otherwise lost on ungraceful
    /// termination.
    pub fn flush(&self) {
        let mut backend = self.backend.lock();
        let path = match &backend.state {
            FileState::Ready { path, .. } => path.clone(),
            _ => return,
        };
        self.flush_buffer(&mut backend, &path);
    }

    fn emit(&self, level: LogLevel, message: &str, context: Option<&Value>) {
        if level < *self.level.read() {
            return;
        }

        let message = sanitize_message(message);
        let line = format!(
            "[{}] [{}] [{}] {}",
            now_timestamp(),
            level,
            self.module,
            message
        );

        self.console.emit(level, &line, context);

        if self.config.file_logging {
            self.write_to_file(&line, context);
        }
    }

    fn write_to_file(&self, line: &str, context: Option<&Value>) {
        let mut backend = self.backend.lock();
        self.ensure_initialized(&mut backend);

        let path = match &backend.state {
            FileState::Ready { path, .. } => path.clone(),
            _ => return,
        };

        let mut full = line.to_string();
        if let Some(context) = context {
            full.push(' ');
            full.push_str(&serialize_context(context));
        }
        full.push('\n');

        if self.config.buffer_size == 0 {
            self.append(&mut backend, &path, full);
        } else {
            backend.buffer.push(full);
            if backend.buffer.len() >= self.config.buffer_size {
                self.flush_buffer(&mut backend, &path);
            }
        }
    }

    /// Attempt file setup once; later calls observe the settled state.
    fn ensure_initialized(&self, backend: &mut FileBackend) {
        if backend.state != FileState::NotAttempted {
            return;
        }

        match self.init_file_logging() {
            Ok((dir, path)) => backend.state = FileState::Ready { dir, path },
            Err(e) => {
                backend.state = FileState::Disabled;
                self.report_failure("Failed to initialize file logging", &e);
            }
        }
    }

    fn init_file_logging(&self) -> Result<(PathBuf, PathBuf)> {
        let base = self.platform.writable_base_dir()?;
        let dir = base.join(LOG_DIR_NAME);
        std::fs::create_dir_all(&dir)
            .map_err(|e| LoggerError::io("creating directory", &dir, e))?;
        let path = dir.join(LOG_FILE_NAME);
        Ok((dir, path))
    }

    /// One physical append, preceded by the sampled rotation check.
    fn append(&self, backend: &mut FileBackend, path: &Path, content: String) {
        backend.write_counter += 1;
        if backend.write_counter >= self.config.rotation_check_interval {
            backend.write_counter = 0;
            self.check_rotation(path);
        }

        match append_bytes(path, content.as_bytes()) {
            Ok(()) => {
                self.stats.record_append();
            }
            Err(e) => {
                self.stats.record_failed_append();
                self.report_failure("Failed to write to log file", &e);
            }
        }
    }

    fn flush_buffer(&self, backend: &mut FileBackend, path: &Path) {
        if backend.buffer.is_empty() {
            return;
        }
        let content: String = std::mem::take(&mut backend.buffer).concat();
        self.stats.record_buffer_flush();
        self.append(backend, path, content);
    }

    fn check_rotation(&self, path: &Path) {
        self.stats.record_rotation_check();
        match rotate_if_needed(path, self.config.max_file_size, self.config.max_backups) {
            Ok(true) => {
                self.stats.record_rotation();
            }
            Ok(false) => {}
            Err(e) => self.report_failure("Failed to rotate log file", &e),
        }
    }

    /// Report an internal failure through the console error channel.
    /// Unprefixed: these lines come from the logger itself, not a module.
    fn report_failure(&self, what: &str, error: &LoggerError) {
        self.console
            .emit(LogLevel::Error, what, Some(&error_details(error)));
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

fn append_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::io("opening", path, e))?;
    file.write_all(bytes)
        .map_err(|e| LoggerError::io("appending to", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::platform::FixedPaths;
    use serde_json::json;
    use tempfile::tempdir;

    struct BrokenPlatform;

    impl Platform for BrokenPlatform {
        fn writable_base_dir(&self) -> Result<PathBuf> {
            Err(LoggerError::platform("not ready"))
        }

        fn is_packaged(&self) -> bool {
            false
        }
    }

    fn memory_logger(module: &str, config: LoggerConfig) -> (Logger, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(
            module,
            config,
            Arc::new(FixedPaths::new(std::env::temp_dir(), false)),
            console.clone(),
        );
        (logger, console)
    }

    #[test]
    fn test_module_name_getter() {
        let (logger, _) = memory_logger("auth", LoggerConfig::new());
        assert_eq!(logger.module_name(), "auth");
    }

    #[test]
    fn test_below_threshold_has_no_observable_effect() {
        let (logger, console) = memory_logger("auth", LoggerConfig::new());

        logger.debug("invisible");

        assert!(console.is_empty());
        assert_eq!(logger.stats().appends(), 0);
    }

    #[test]
    fn test_console_line_is_prefixed() {
        let (logger, console) = memory_logger("auth", LoggerConfig::new());

        logger.info_with("login ok", json!({ "user": "u1" }));

        let lines = console.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].message.starts_with('['));
        assert!(lines[0].message.contains("[INFO] [auth] login ok"));
        assert_eq!(lines[0].context, Some(json!({ "user": "u1" })));
    }

    #[test]
    fn test_set_level_takes_effect() {
        let (logger, console) = memory_logger("auth", LoggerConfig::new());

        logger.debug("dropped");
        logger.set_level(LogLevel::Debug);
        logger.debug("kept");

        assert_eq!(console.len(), 1);
        assert!(console.lines()[0].message.contains("kept"));
    }

    #[test]
    fn test_message_is_sanitized() {
        let (logger, console) = memory_logger("auth", LoggerConfig::new());

        logger.info("one\ntwo");

        assert!(console.lines()[0].message.contains("one\\ntwo"));
    }

    #[test]
    fn test_deferred_init_waits_for_first_write() {
        let dir = tempdir().unwrap();
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(
            "net",
            LoggerConfig::new()
                .with_file_logging(true)
                .with_defer_init(true),
            Arc::new(FixedPaths::new(dir.path(), false)),
            console,
        );

        assert_eq!(logger.file_state(), FileState::NotAttempted);
        assert_eq!(logger.log_file_path(), None);

        logger.info("first write");

        assert!(logger.file_state().is_ready());
        let path = logger.log_file_path().unwrap();
        assert!(path.ends_with("logs/app.log"));
        assert!(path.exists());
    }

    #[test]
    fn test_eager_init_runs_at_construction() {
        let dir = tempdir().unwrap();
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(
            "net",
            LoggerConfig::new().with_file_logging(true),
            Arc::new(FixedPaths::new(dir.path(), false)),
            console,
        );

        assert!(logger.file_state().is_ready());
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_failed_init_disables_file_logging_permanently() {
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(
            "net",
            LoggerConfig::new()
                .with_file_logging(true)
                .with_defer_init(true),
            Arc::new(BrokenPlatform),
            console.clone(),
        );

        logger.info("ping");

        assert_eq!(logger.file_state(), FileState::Disabled);
        assert_eq!(logger.log_file_path(), None);
        assert_eq!(logger.stats().appends(), 0);

        let errors = console.lines_at(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Failed to initialize file logging");
        assert!(errors[0].context.is_some());

        // Only one attempt: further writes report nothing new
        logger.info("ping again");
        assert_eq!(console.lines_at(LogLevel::Error).len(), 1);
    }

    #[test]
    fn test_error_with_source_normalizes_error() {
        let (logger, console) = memory_logger("net", LoggerConfig::new());

        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        logger.error_with_source("request failed", &io_err);

        let errors = console.lines_at(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        let context = errors[0].context.as_ref().unwrap();
        assert_eq!(context["name"], "Error");
        assert_eq!(context["message"], "refused");
        assert!(context["stack"].as_str().unwrap().starts_with("Error: "));
    }
}
