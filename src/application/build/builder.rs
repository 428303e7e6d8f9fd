//! Asset Builder
//!
//! Runs a single build unit: prepares the destination directory, asks the
//! staleness oracle, and invokes the unit's tool when needed. A failing tool
//! is returned as an error; callers propagate it with `?`, which stops the
//! whole run.

use std::path::Path;

use crate::config::RunOptions;
use crate::domain::entities::BuildRule;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, ToolRunner};
use crate::domain::services::{Freshness, ResolvedTools};
use crate::error::{BuildError, BuildResult};

use super::result::BuildOutcome;

/// Builds one source/destination pair at a time
pub struct AssetBuilder<FS, TR, ES>
where
    FS: FileSystem,
    TR: ToolRunner,
    ES: BuildEventSink,
{
    fs: FS,
    runner: TR,
    events: ES,
    tools: ResolvedTools,
    options: RunOptions,
}

impl<FS, TR, ES> AssetBuilder<FS, TR, ES>
where
    FS: FileSystem,
    TR: ToolRunner,
    ES: BuildEventSink,
{
    pub fn new(fs: FS, runner: TR, events: ES, tools: ResolvedTools, options: RunOptions) -> Self {
        Self {
            fs,
            runner,
            events,
            tools,
            options,
        }
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    pub fn events(&self) -> &ES {
        &self.events
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Build `destination` from `source` if it is stale
    pub fn build(
        &self,
        rule: &BuildRule,
        source: &Path,
        destination: &Path,
    ) -> BuildResult<BuildOutcome> {
        self.build_forced(rule, source, destination, false)
    }

    /// Like [`build`](Self::build), but `force` adds to the run's rebuild flag
    pub fn build_forced(
        &self,
        rule: &BuildRule,
        source: &Path,
        destination: &Path,
        force: bool,
    ) -> BuildResult<BuildOutcome> {
        if !self.options.dry_run {
            if let Some(parent) = destination.parent() {
                self.fs.create_dir_all(parent)?;
            }
        }

        let freshness = Freshness::capture(&self.fs, source, destination);
        if !freshness.requires_build(self.options.rebuild || force) {
            self.events.on_event(BuildEvent::UnitSkipped {
                source: source.to_path_buf(),
                destination: destination.to_path_buf(),
                newer: freshness.newer,
                dest_exists: freshness.dest_exists,
            });
            return Ok(BuildOutcome::Skipped);
        }

        let invocation = rule.invocation(&self.tools, source, destination);

        if self.options.dry_run {
            self.events.on_event(BuildEvent::UnitWouldBuild {
                source: source.to_path_buf(),
                destination: destination.to_path_buf(),
                command: invocation.display(),
            });
            return Ok(BuildOutcome::WouldBuild);
        }

        self.events.on_event(BuildEvent::UnitStarted {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            command: invocation.display(),
            newer: freshness.newer,
            dest_exists: freshness.dest_exists,
        });

        let output = self
            .runner
            .run(&invocation)
            .map_err(|e| BuildError::ToolSpawn {
                tool: invocation.program().to_path_buf(),
                message: e.to_string(),
            })?;

        // A failing tool's diagnostics are shown even without --verbose.
        if self.options.verbose || !output.success() {
            self.events.on_event(BuildEvent::ToolOutput {
                source: source.to_path_buf(),
                stdout: output.stdout.clone(),
                stderr: output.stderr.clone(),
            });
        }

        if !output.success() {
            self.events.on_event(BuildEvent::UnitFailed {
                source: source.to_path_buf(),
                code: output.code,
            });
            return Err(BuildError::ToolFailed {
                source_path: source.to_path_buf(),
                tool: invocation.program().to_path_buf(),
                code: output.code,
            });
        }

        self.events.on_event(BuildEvent::UnitBuilt {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
        Ok(BuildOutcome::Built)
    }
}
