//! Process-wide logger registry
//!
//! An explicitly constructed object rather than ambient global state: the
//! host creates one registry at process start, hands it to consumers by
//! reference, and calls [`LoggerRegistry::flush_all`] before exit.

use crate::console::{ConsoleSink, TerminalConsole};
use crate::core::config::LoggerConfig;
use crate::core::log_level::LogLevel;
use crate::core::logger::Logger;
use crate::platform::Platform;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Module name of the application-wide default logger
pub const DEFAULT_MODULE: &str = "app";

/// Module name used when a wire entry does not carry one
pub const FALLBACK_MODULE: &str = "renderer";

/// Generic log entry ingested from another subsystem, e.g. an IPC handler
///
/// The `timestamp` field is accepted on the wire but ignored at emission:
/// every line is stamped with the receiving process's clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

/// Registry of shared loggers for one process
///
/// Never fails: logger construction never fails, so neither do lookups.
pub struct LoggerRegistry {
    platform: Arc<dyn Platform>,
    console: Arc<dyn ConsoleSink>,
    default_logger: Mutex<Option<Arc<Logger>>>,
    modules: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Create a registry whose loggers write to the terminal console
    #[must_use]
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self::with_console(platform, Arc::new(TerminalConsole::new()))
    }

    /// Create a registry with a custom console sink
    #[must_use]
    pub fn with_console(platform: Arc<dyn Platform>, console: Arc<dyn ConsoleSink>) -> Self {
        Self {
            platform,
            console,
            default_logger: Mutex::new(None),
            modules: Mutex::new(HashMap::new()),
        }
    }

    /// Construct a fresh logger sharing the registry's platform and console
    ///
    /// No caching; every call returns a new instance.
    #[must_use]
    pub fn create_logger(&self, module: impl Into<String>, config: LoggerConfig) -> Arc<Logger> {
        Arc::new(Logger::with_console(
            module,
            config,
            self.platform.clone(),
            self.console.clone(),
        ))
    }

    /// Application-wide default logger, created on first use
    ///
    /// Packaged builds log at info with file persistence; development
    /// builds log at debug to console only. File setup is always deferred.
    pub fn default_logger(&self) -> Arc<Logger> {
        let mut slot = self.default_logger.lock();
        if let Some(logger) = slot.as_ref() {
            return logger.clone();
        }

        let packaged = self.platform.is_packaged();
        let config = LoggerConfig::new()
            .with_level(if packaged { LogLevel::Info } else { LogLevel::Debug })
            .with_file_logging(packaged)
            .with_defer_init(true);
        let logger = self.create_logger(DEFAULT_MODULE, config);
        *slot = Some(logger.clone());
        logger
    }

    /// Shared per-module logger, created on first lookup and cached
    ///
    /// Cached loggers persist to disk and defer file setup until first use.
    pub fn module_logger(&self, module: &str) -> Arc<Logger> {
        let mut modules = self.modules.lock();
        if let Some(logger) = modules.get(module) {
            return logger.clone();
        }

        let config = LoggerConfig::new()
            .with_file_logging(true)
            .with_defer_init(true);
        let logger = self.create_logger(module, config);
        modules.insert(module.to_string(), logger.clone());
        logger
    }

    /// Route a wire entry into the cached logger for its module
    ///
    /// An unrecognized level tag dispatches as info; a missing module name
    /// falls back to [`FALLBACK_MODULE`].
    pub fn dispatch(&self, event: &LogEvent) {
        let module = event.module.as_deref().unwrap_or(FALLBACK_MODULE);
        let logger = self.module_logger(module);
        let level = LogLevel::parse_lossy(&event.level);

        match &event.context {
            Some(context) => logger.log_with(level, &event.message, context.clone()),
            None => logger.log(level, &event.message),
        }
    }

    /// Flush the default logger (if created) and every cached module logger
    ///
    /// Call before process exit to minimize buffered-entry loss.
    pub fn flush_all(&self) {
        if let Some(logger) = self.default_logger.lock().as_ref() {
            logger.flush();
        }
        for logger in self.modules.lock().values() {
            logger.flush();
        }
    }

    /// Number of cached module loggers
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.lock().len()
    }
}
