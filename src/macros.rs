//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use applog::prelude::*;
//! use applog::info;
//! use std::sync::Arc;
//!
//! let platform = Arc::new(FixedPaths::new(std::env::temp_dir(), false));
//! let logger = Logger::new("app", LoggerConfig::new(), platform);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use applog::prelude::*;
/// # use std::sync::Arc;
/// # let logger = Logger::new("app", LoggerConfig::new(), Arc::new(FixedPaths::new(std::env::temp_dir(), false)));
/// use applog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use applog::prelude::*;
/// # use std::sync::Arc;
/// # let config = LoggerConfig::new().with_level(LogLevel::Debug);
/// # let logger = Logger::new("app", config, Arc::new(FixedPaths::new(std::env::temp_dir(), false)));
/// use applog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use applog::prelude::*;
/// # use std::sync::Arc;
/// # let logger = Logger::new("app", LoggerConfig::new(), Arc::new(FixedPaths::new(std::env::temp_dir(), false)));
/// use applog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use applog::prelude::*;
/// # use std::sync::Arc;
/// # let logger = Logger::new("app", LoggerConfig::new(), Arc::new(FixedPaths::new(std::env::temp_dir(), false)));
/// use applog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use applog::prelude::*;
/// # use std::sync::Arc;
/// # let logger = Logger::new("app", LoggerConfig::new(), Arc::new(FixedPaths::new(std::env::temp_dir(), false)));
/// use applog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
