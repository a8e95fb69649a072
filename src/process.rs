//! Child process tracking
//!
//! A registry of spawned child processes with a bulk-kill sweep for
//! shutdown. Kill failures never abort the sweep: a process that already
//! exited is a benign outcome, anything else is recorded in the summary
//! and the remaining processes are still attempted.

use parking_lot::Mutex;
use std::process::Child;

/// Typed result of a [`ProcessTracker::kill_all`] sweep
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KillSummary {
    /// Processes killed by the sweep
    pub killed: usize,
    /// Processes that had already exited before the sweep reached them
    pub already_exited: usize,
    /// Processes whose kill failed for another reason, with the error text
    pub failures: Vec<(u32, String)>,
}

impl KillSummary {
    /// Total number of processes the sweep attempted
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.killed + self.already_exited + self.failures.len()
    }

    /// Whether every attempt ended in a kill or a benign already-exited
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registry of spawned child processes
#[derive(Default)]
pub struct ProcessTracker {
    children: Mutex<Vec<Child>>,
}

impl ProcessTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a spawned child process; returns its PID
    pub fn register(&self, child: Child) -> u32 {
        let pid = child.id();
        self.children.lock().push(child);
        pid
    }

    /// Stop tracking the process with the given PID without killing it
    pub fn unregister(&self, pid: u32) -> Option<Child> {
        let mut children = self.children.lock();
        let index = children.iter().position(|child| child.id() == pid)?;
        Some(children.remove(index))
    }

    /// Number of tracked processes
    #[must_use]
    pub fn count(&self) -> usize {
        self.children.lock().len()
    }

    /// PIDs of the tracked processes, in registration order
    #[must_use]
    pub fn pids(&self) -> Vec<u32> {
        self.children.lock().iter().map(Child::id).collect()
    }

    /// Kill every tracked process, in registration order
    ///
    /// Killed processes are also reaped. The tracker is empty afterwards
    /// regardless of individual outcomes.
    pub fn kill_all(&self) -> KillSummary {
        let children = std::mem::take(&mut *self.children.lock());
        let mut summary = KillSummary::default();

        for mut child in children {
            let pid = child.id();
            match child.kill() {
                Ok(()) => {
                    let _ = child.wait();
                    summary.killed += 1;
                }
                Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {
                    // kill() reports InvalidInput once the child has been reaped
                    let _ = child.wait();
                    summary.already_exited += 1;
                }
                Err(e) => {
                    summary.failures.push((pid, e.to_string()));
                }
            }
        }

        summary
    }
}
