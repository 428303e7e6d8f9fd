//! Bulk Dispatch Use Case
//!
//! Runs one command per matching source file below a root. Results are
//! reported and otherwise ignored: a failing or unstartable command never
//! stops the walk.

use std::ffi::OsString;
use std::path::Path;

use crate::domain::ports::{
    DispatchEvent, DispatchEventSink, FileSystem, ToolInvocation, ToolRunner,
};

use super::options::DispatchOptions;
use super::result::DispatchReport;

/// Runs a command prefix against every matching file
pub struct BulkDispatcher<FS, TR, ES>
where
    FS: FileSystem,
    TR: ToolRunner,
    ES: DispatchEventSink,
{
    fs: FS,
    runner: TR,
    events: ES,
    options: DispatchOptions,
}

impl<FS, TR, ES> BulkDispatcher<FS, TR, ES>
where
    FS: FileSystem,
    TR: ToolRunner,
    ES: DispatchEventSink,
{
    pub fn new(fs: FS, runner: TR, events: ES, options: DispatchOptions) -> Self {
        Self {
            fs,
            runner,
            events,
            options,
        }
    }

    /// Run `command_prefix + [file]` for every matching file under `root`.
    ///
    /// An empty prefix dispatches nothing.
    pub fn dispatch(&self, command_prefix: &[OsString], root: &Path) -> DispatchReport {
        let mut report = DispatchReport::new();
        if command_prefix.is_empty() {
            return report;
        }

        for file in self.fs.walk_files(root) {
            if !self.options.matches_extension(&file) {
                continue;
            }
            let relative_dir = file
                .parent()
                .and_then(|dir| dir.strip_prefix(root).ok())
                .unwrap_or_else(|| Path::new(""));
            if self.options.is_excluded(relative_dir) {
                log::debug!("excluded {}", file.display());
                report.excluded += 1;
                continue;
            }

            let argv = command_prefix
                .iter()
                .cloned()
                .chain(std::iter::once(file.clone().into_os_string()));
            let Some(invocation) = ToolInvocation::from_argv(argv) else {
                continue;
            };

            match self.runner.run(&invocation) {
                Ok(output) => {
                    if !output.success() {
                        report.nonzero_exit.push(file.clone());
                    }
                    report.dispatched.push(file.clone());
                    self.events.on_event(DispatchEvent::Finished {
                        file,
                        invocation,
                        output,
                    });
                }
                Err(e) => {
                    log::warn!("failed to run {}: {}", invocation.program().display(), e);
                    report.spawn_failures.push(file.clone());
                    self.events.on_event(DispatchEvent::SpawnFailed {
                        file,
                        invocation,
                        message: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
