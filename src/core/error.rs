//! Error types for the logging facility
//!
//! These errors stay internal to the crate: the public logging methods never
//! return them. Failures degrade to console-only output and are reported
//! through the console sink instead.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The host platform could not supply a writable base directory
    #[error("platform unavailable: {0}")]
    PlatformUnavailable(String),

    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    Io {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create a platform-unavailable error
    pub fn platform(message: impl Into<String>) -> Self {
        LoggerError::PlatformUnavailable(message.into())
    }

    /// Create an IO error with context
    pub fn io(
        operation: impl Into<String>,
        path: impl AsRef<std::path::Path>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::Io {
            operation: operation.into(),
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
