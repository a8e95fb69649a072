//! Core logger types

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod sanitize;
pub mod serialize;
pub mod stats;
pub mod timestamp;

pub use config::{
    LoggerConfig, DEFAULT_MAX_BACKUPS, DEFAULT_MAX_FILE_SIZE, DEFAULT_ROTATION_CHECK_INTERVAL,
};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{FileState, Logger, LOG_DIR_NAME, LOG_FILE_NAME};
pub use sanitize::sanitize_message;
pub use serialize::{error_details, serialize_context, CIRCULAR_PLACEHOLDER, MAX_DEPTH};
pub use stats::FileLogStats;
pub use timestamp::{format_timestamp, now_timestamp};
