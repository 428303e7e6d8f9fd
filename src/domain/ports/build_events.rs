//! Build Event Port
//!
//! Provides an observable interface for asset build and dispatch runs.
//! Enables console progress, JSON event streams, and recording in tests.

use std::path::PathBuf;

use crate::domain::value_objects::AssetCategory;

/// Event emitted during an asset build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Build started
    Started {
        assets_root: PathBuf,
        output_root: PathBuf,
        rebuild: bool,
        dry_run: bool,
    },

    /// Output root purged before traversal
    Purged { path: PathBuf, existed: bool },

    /// A category directory is about to be walked
    CategoryStarted { category: AssetCategory, dir: PathBuf },

    /// A build unit needs building and its tool is about to run
    UnitStarted {
        source: PathBuf,
        destination: PathBuf,
        command: String,
        newer: bool,
        dest_exists: bool,
    },

    /// Captured tool output (verbose runs only)
    ToolOutput {
        source: PathBuf,
        stdout: String,
        stderr: String,
    },

    /// A build unit was rebuilt
    UnitBuilt { source: PathBuf, destination: PathBuf },

    /// A build unit needed building but this is a dry run
    UnitWouldBuild {
        source: PathBuf,
        destination: PathBuf,
        command: String,
    },

    /// A build unit was up to date
    UnitSkipped {
        source: PathBuf,
        destination: PathBuf,
        newer: bool,
        dest_exists: bool,
    },

    /// A tool failed; the run stops after this event
    UnitFailed {
        source: PathBuf,
        code: Option<i32>,
    },

    /// An intermediate file was deleted
    IntermediateRemoved { path: PathBuf },

    /// Build completed
    Completed { built: usize, skipped: usize },
}

/// Trait for receiving build events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable terminal output
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait BuildEventSink {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);
}

impl<T: BuildEventSink + ?Sized> BuildEventSink for &T {
    fn on_event(&self, event: BuildEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}
