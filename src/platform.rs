//! Host platform seam
//!
//! The logging facility needs two facts from its host application: a base
//! directory it may write under, and whether this is a packaged build.
//! Both sit behind a trait so the facility can be constructed before the
//! host is ready (path resolution is allowed to fail) and tested without
//! touching real user directories.

use crate::core::error::{LoggerError, Result};
use std::path::PathBuf;

pub trait Platform: Send + Sync {
    /// Resolve the base directory the application may write under
    ///
    /// May fail while the host is still starting up. Callers catch the
    /// failure and degrade to console-only output.
    fn writable_base_dir(&self) -> Result<PathBuf>;

    /// Whether this is a packaged production build
    fn is_packaged(&self) -> bool;
}

/// Platform backed by the per-user local data directory
///
/// Resolves `<local-data-dir>/<app_name>` via the `directories` crate,
/// e.g. `~/.local/share/myapp` on Linux.
pub struct SystemPaths {
    app_name: String,
    packaged: bool,
}

impl SystemPaths {
    pub fn new(app_name: impl Into<String>, packaged: bool) -> Self {
        Self {
            app_name: app_name.into(),
            packaged,
        }
    }
}

impl Platform for SystemPaths {
    fn writable_base_dir(&self) -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", &self.app_name)
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .ok_or_else(|| LoggerError::platform("no home directory available"))
    }

    fn is_packaged(&self) -> bool {
        self.packaged
    }
}

/// Platform with a fixed base directory
///
/// For embedding in hosts that manage their own paths, and for tests.
pub struct FixedPaths {
    base: PathBuf,
    packaged: bool,
}

impl FixedPaths {
    pub fn new(base: impl Into<PathBuf>, packaged: bool) -> Self {
        Self {
            base: base.into(),
            packaged,
        }
    }
}

impl Platform for FixedPaths {
    fn writable_base_dir(&self) -> Result<PathBuf> {
        Ok(self.base.clone())
    }

    fn is_packaged(&self) -> bool {
        self.packaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_paths_returns_configured_dir() {
        let platform = FixedPaths::new("/tmp/applog-test", false);
        let dir = platform.writable_base_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/applog-test"));
        assert!(!platform.is_packaged());
    }

    #[test]
    fn test_packaged_flag() {
        assert!(SystemPaths::new("myapp", true).is_packaged());
        assert!(!SystemPaths::new("myapp", false).is_packaged());
        assert!(FixedPaths::new("/tmp", true).is_packaged());
    }
}
