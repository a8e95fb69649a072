//! Size-based log rotation
//!
//! Backups sit next to the live file as `<file>.1` (most recent) through
//! `<file>.<max_backups>` (oldest). Rotation drops the oldest slot, shifts
//! the surviving backups up by one index, then moves the live file to `.1`.
//! A missing intermediate index is skipped rather than treated as
//! corruption, so a chain damaged by an earlier interruption still rotates.

use crate::core::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Rotation lock for one file path, interned process-wide
///
/// Several loggers may resolve the same live file (the registry gives every
/// module logger the same `logs/app.log`), so the rename sequence must be a
/// critical section per path, not per logger instance.
fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();
    let locks = LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    locks.lock().entry(path.to_path_buf()).or_default().clone()
}

/// Rotate `path` if it has reached `max_size` bytes
///
/// Returns whether a rotation took place. A missing live file is a no-op.
/// Any filesystem failure aborts the remaining steps and propagates; the
/// caller reports it and continues logging into the oversized live file.
/// The size check runs under the per-path lock, so a competing writer that
/// already rotated is observed as a fresh, under-threshold file.
pub fn rotate_if_needed(path: &Path, max_size: u64, max_backups: usize) -> Result<bool> {
    let lock = path_lock(path);
    let _guard = lock.lock();

    if !path.exists() {
        return Ok(false);
    }

    let size = fs::metadata(path)
        .map_err(|e| LoggerError::io("reading size of", path, e))?
        .len();
    if size < max_size {
        return Ok(false);
    }

    // Free the oldest retained slot before shifting into it
    let oldest = backup_path(path, max_backups);
    if oldest.exists() {
        fs::remove_file(&oldest)
            .map_err(|e| LoggerError::io("removing oldest backup", &oldest, e))?;
    }

    for i in (1..max_backups).rev() {
        let old = backup_path(path, i);
        if old.exists() {
            rename_replacing(&old, &backup_path(path, i + 1))?;
        }
    }

    rename_replacing(path, &backup_path(path, 1))?;
    Ok(true)
}

/// Backup file path for the given index, e.g. `app.log.3`
#[must_use]
pub fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut backup = path.to_path_buf();
    let filename = backup
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app.log");
    backup.set_file_name(format!("{}.{}", filename, index));
    backup
}

/// Rename that tolerates a pre-existing destination
///
/// Some platforms fail `rename` when the destination exists; remove the
/// destination and retry once.
fn rename_replacing(old: &Path, new: &Path) -> Result<()> {
    match fs::rename(old, new) {
        Ok(()) => Ok(()),
        Err(first) => {
            // Retry only while the source is still present. A vanished
            // source means another process moved it; deleting the
            // destination then would discard that writer's backup.
            if old.exists() {
                if new.exists() {
                    let _ = fs::remove_file(new);
                }
                fs::rename(old, new).map_err(|e| LoggerError::io("renaming backup", old, e))
            } else {
                Err(LoggerError::io("renaming backup", old, first))
            }
        }
    }
}
