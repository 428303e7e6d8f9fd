//! Build result types

use std::path::PathBuf;

/// What happened to one build unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The tool ran and succeeded
    Built,
    /// The unit was stale but this is a dry run
    WouldBuild,
    /// The destination was up to date
    Skipped,
}

impl BuildOutcome {
    /// Whether the unit was (or would have been) rebuilt
    pub fn rebuilt(&self) -> bool {
        matches!(self, BuildOutcome::Built | BuildOutcome::WouldBuild)
    }
}

/// Result of a full asset build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Destinations produced by a tool run
    pub built: Vec<PathBuf>,
    /// Destinations a dry run would have produced
    pub would_build: Vec<PathBuf>,
    /// Destinations that were already up to date
    pub skipped: Vec<PathBuf>,
    /// Intermediate files deleted after use
    pub removed_intermediates: Vec<PathBuf>,
    /// The output root existed and was deleted before building
    pub purged: bool,
}

impl BuildSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: BuildOutcome, destination: PathBuf) {
        match outcome {
            BuildOutcome::Built => self.built.push(destination),
            BuildOutcome::WouldBuild => self.would_build.push(destination),
            BuildOutcome::Skipped => self.skipped.push(destination),
        }
    }

    /// Number of tool invocations this run made (or would make)
    pub fn rebuilt_count(&self) -> usize {
        self.built.len() + self.would_build.len()
    }

    pub fn is_up_to_date(&self) -> bool {
        self.rebuilt_count() == 0
    }
}
