//! File-logging statistics for observability
//!
//! Counters for the file output path. Logging methods never return errors,
//! so these counters are how callers and tests observe disk activity and
//! degradation without scraping console output.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a logger's file output path
///
/// # Example
///
/// ```
/// use applog::FileLogStats;
///
/// let stats = FileLogStats::new();
/// stats.record_append();
/// stats.record_rotation_check();
///
/// assert_eq!(stats.appends(), 1);
/// assert_eq!(stats.rotation_checks(), 1);
/// ```
#[derive(Debug)]
pub struct FileLogStats {
    /// Number of completed disk appends (a buffered flush counts once)
    appends: AtomicU64,

    /// Number of appends that failed and fell back to console-only
    failed_appends: AtomicU64,

    /// Number of rotation size checks performed
    rotation_checks: AtomicU64,

    /// Number of completed rotations
    rotations: AtomicU64,

    /// Number of buffer flushes handed to disk
    buffer_flushes: AtomicU64,
}

impl FileLogStats {
    /// Create a new stats instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            appends: AtomicU64::new(0),
            failed_appends: AtomicU64::new(0),
            rotation_checks: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            buffer_flushes: AtomicU64::new(0),
        }
    }

    /// Get the number of completed disk appends
    #[inline]
    pub fn appends(&self) -> u64 {
        self.appends.load(Ordering::Relaxed)
    }

    /// Get the number of failed appends
    #[inline]
    pub fn failed_appends(&self) -> u64 {
        self.failed_appends.load(Ordering::Relaxed)
    }

    /// Get the number of rotation size checks performed
    #[inline]
    pub fn rotation_checks(&self) -> u64 {
        self.rotation_checks.load(Ordering::Relaxed)
    }

    /// Get the number of completed rotations
    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    /// Get the number of buffer flushes handed to disk
    #[inline]
    pub fn buffer_flushes(&self) -> u64 {
        self.buffer_flushes.load(Ordering::Relaxed)
    }

    /// Record a completed disk append
    #[inline]
    pub fn record_append(&self) -> u64 {
        self.appends.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed append
    #[inline]
    pub fn record_failed_append(&self) -> u64 {
        self.failed_appends.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a rotation size check
    #[inline]
    pub fn record_rotation_check(&self) -> u64 {
        self.rotation_checks.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a completed rotation
    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a buffer flush handed to disk
    #[inline]
    pub fn record_buffer_flush(&self) -> u64 {
        self.buffer_flushes.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.appends.store(0, Ordering::Relaxed);
        self.failed_appends.store(0, Ordering::Relaxed);
        self.rotation_checks.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        self.buffer_flushes.store(0, Ordering::Relaxed);
    }
}

impl Default for FileLogStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FileLogStats {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            appends: AtomicU64::new(self.appends()),
            failed_appends: AtomicU64::new(self.failed_appends()),
            rotation_checks: AtomicU64::new(self.rotation_checks()),
            rotations: AtomicU64::new(self.rotations()),
            buffer_flushes: AtomicU64::new(self.buffer_flushes()),
        }
    }
}
