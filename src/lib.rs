//! # applog
//!
//! Module-scoped logging for desktop application backends: leveled console
//! output, optional file persistence with size-based rotation, deferred
//! initialization, and buffered writes.
//!
//! ## Features
//!
//! - **Never fails**: construction and logging degrade to console-only
//!   output instead of returning errors
//! - **Deferred initialization**: loggers can be built before the host
//!   platform is ready to resolve paths
//! - **Size-based rotation**: `app.log.1` through `app.log.N` backups with
//!   sampled size checks
//! - **Registry**: shared per-module loggers, a packaging-aware default
//!   logger, and routing for log entries arriving from other subsystems
//!
//! ## Quick start
//!
//! ```
//! use applog::{FixedPaths, LoggerRegistry};
//! use std::sync::Arc;
//!
//! let platform = Arc::new(FixedPaths::new(std::env::temp_dir().join("applog-demo"), false));
//! let registry = LoggerRegistry::new(platform);
//!
//! let log = registry.default_logger();
//! log.info("backend ready");
//!
//! let net = registry.module_logger("net");
//! net.warn("socket slow");
//!
//! registry.flush_all();
//! ```
//!
//! Production hosts use [`SystemPaths`] instead of [`FixedPaths`] to place
//! log files under the per-user local data directory.

pub mod console;
pub mod core;
pub mod macros;
pub mod platform;
pub mod process;
pub mod registry;
pub mod rotation;

pub mod prelude {
    pub use crate::console::{ConsoleSink, MemoryConsole, TerminalConsole};
    pub use crate::core::{
        FileLogStats, FileState, LogLevel, Logger, LoggerConfig, LoggerError, Result,
    };
    pub use crate::platform::{FixedPaths, Platform, SystemPaths};
    pub use crate::process::{KillSummary, ProcessTracker};
    pub use crate::registry::{LogEvent, LoggerRegistry};
}

pub use crate::console::{CapturedLine, ConsoleSink, MemoryConsole, TerminalConsole};
pub use crate::core::{
    FileLogStats, FileState, LogLevel, Logger, LoggerConfig, LoggerError, Result,
    CIRCULAR_PLACEHOLDER, LOG_DIR_NAME, LOG_FILE_NAME,
};
pub use crate::platform::{FixedPaths, Platform, SystemPaths};
pub use crate::process::{KillSummary, ProcessTracker};
pub use crate::registry::{LogEvent, LoggerRegistry, DEFAULT_MODULE, FALLBACK_MODULE};
pub use crate::rotation::{backup_path, rotate_if_needed};
