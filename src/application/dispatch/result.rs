//! Dispatch Result

use std::path::PathBuf;

/// What a bulk dispatch did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Files the command ran on, in walk order
    pub dispatched: Vec<PathBuf>,
    /// Files whose command exited non-zero or was killed (informational only)
    pub nonzero_exit: Vec<PathBuf>,
    /// Files whose command could not be started
    pub spawn_failures: Vec<PathBuf>,
    /// Matching files skipped because of an excluded directory
    pub excluded: usize,
}

impl DispatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.dispatched.len() + self.spawn_failures.len()
    }
}
