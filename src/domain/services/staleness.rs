//! Staleness oracle
//!
//! Decides whether a destination must be (re)built from its source by
//! comparing modification times. Both timestamps are read back to back in
//! `Freshness::capture` so one decision never mixes observations taken at
//! different points of the run.

use std::path::Path;
use std::time::SystemTime;

use crate::domain::ports::FileSystem;

/// Snapshot of a source/destination pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    /// Destination exists on disk
    pub dest_exists: bool,
    /// Source was modified strictly after the destination
    pub newer: bool,
}

impl Freshness {
    /// Read existence and modification times for one pair.
    ///
    /// The source is expected to exist. If its timestamp cannot be read the
    /// pair is reported as newer so the tool gets to surface the problem. A
    /// destination whose timestamp cannot be read is treated as missing.
    pub fn capture(fs: &impl FileSystem, source: &Path, destination: &Path) -> Self {
        if !fs.exists(destination) {
            return Self::missing();
        }

        let source_time = fs.modified(source).ok();
        match fs.modified(destination) {
            Ok(dest_time) => Self::from_times(source_time, dest_time),
            Err(_) => Self::missing(),
        }
    }

    /// Freshness for a destination that does not exist
    pub fn missing() -> Self {
        Self {
            dest_exists: false,
            newer: false,
        }
    }

    /// Freshness for an existing destination
    pub fn from_times(source: Option<SystemTime>, destination: SystemTime) -> Self {
        Self {
            dest_exists: true,
            newer: source.map_or(true, |src| src > destination),
        }
    }

    /// Whether the destination has to be built
    pub fn requires_build(&self, force_rebuild: bool) -> bool {
        force_rebuild || !self.dest_exists || self.newer
    }
}

/// Decide whether `destination` must be built from `source`.
///
/// True when rebuilding is forced, when the destination is missing, or when
/// the source is strictly newer than the destination.
pub fn should_build(
    fs: &impl FileSystem,
    source: &Path,
    destination: &Path,
    force_rebuild: bool,
) -> bool {
    Freshness::capture(fs, source, destination).requires_build(force_rebuild)
}
