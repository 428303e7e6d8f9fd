//! Human-readable event sink

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink, DispatchEvent, DispatchEventSink};
use crate::ui::context::UiContext;
use crate::ui::views::{build, dispatch};

/// Renders build and dispatch events to a terminal
pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }

    fn render_build(&self, event: &BuildEvent) -> String {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            BuildEvent::Started {
                assets_root,
                output_root,
                rebuild,
                dry_run,
            } => {
                let mut modes = Vec::new();
                if *rebuild {
                    modes.push("rebuild");
                }
                if *dry_run {
                    modes.push("dry run");
                }
                build::render_build_header(assets_root, output_root, &modes, color, unicode)
            }
            BuildEvent::Purged { path, existed } => {
                build::render_purge(path, *existed, color, unicode)
            }
            BuildEvent::CategoryStarted { category, dir } => {
                build::render_category(*category, dir, color)
            }
            BuildEvent::UnitStarted {
                source,
                command,
                newer,
                dest_exists,
                ..
            } => {
                let mut out =
                    build::render_unit_started(source, *newer, *dest_exists, color, unicode);
                if self.ui.verbose > 0 {
                    out.push_str(&build::render_command(command, color));
                }
                out
            }
            BuildEvent::ToolOutput { stdout, stderr, .. } => {
                build::render_tool_output(stdout, stderr, color)
            }
            BuildEvent::UnitBuilt { destination, .. } => {
                build::render_unit_built(destination, color, unicode)
            }
            BuildEvent::UnitWouldBuild {
                destination,
                command,
                ..
            } => build::render_unit_would_build(destination, command, color, unicode),
            BuildEvent::UnitSkipped { destination, .. } => {
                build::render_unit_skipped(destination, color, unicode)
            }
            BuildEvent::UnitFailed { source, code } => {
                build::render_unit_failed(source, *code, color, unicode)
            }
            BuildEvent::IntermediateRemoved { path } if self.ui.verbose > 0 => {
                build::render_intermediate_removed(path, color)
            }
            BuildEvent::IntermediateRemoved { .. } | BuildEvent::Completed { .. } => {
                String::new()
            }
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let text = self.render_build(&event);
        self.write(&text);
    }
}

impl DispatchEventSink for ConsoleEventSink {
    fn on_event(&self, event: DispatchEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        let text = match &event {
            DispatchEvent::Finished {
                invocation, output, ..
            } => dispatch::render_dispatch_result(invocation, output, color, unicode),
            DispatchEvent::SpawnFailed {
                file,
                invocation,
                message,
            } => dispatch::render_spawn_failure(file, invocation, message, color, unicode),
        };
        self.write(&text);
    }
}
