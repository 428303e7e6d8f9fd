//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON representation of a build event
pub fn event_to_json(event: &BuildEvent) -> serde_json::Value {
    match event {
        BuildEvent::Started {
            assets_root,
            output_root,
            rebuild,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "build",
            "version": env!("CARGO_PKG_VERSION"),
            "assets_root": assets_root.display().to_string(),
            "output_root": output_root.display().to_string(),
            "rebuild": rebuild,
            "dry_run": dry_run,
        }),

        BuildEvent::Purged { path, existed } => serde_json::json!({
            "event": "purged",
            "command": "build",
            "path": path.display().to_string(),
            "existed": existed,
        }),

        BuildEvent::CategoryStarted { category, dir } => serde_json::json!({
            "event": "category_start",
            "command": "build",
            "category": category.label(),
            "dir": dir.display().to_string(),
        }),

        BuildEvent::UnitStarted {
            source,
            destination,
            command,
            newer,
            dest_exists,
        } => serde_json::json!({
            "event": "item_start",
            "command": "build",
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
            "invocation": command,
            "newer": newer,
            "dest_exists": dest_exists,
        }),

        BuildEvent::ToolOutput {
            source,
            stdout,
            stderr,
        } => serde_json::json!({
            "event": "tool_output",
            "command": "build",
            "source": source.display().to_string(),
            "stdout": stdout,
            "stderr": stderr,
        }),

        BuildEvent::UnitBuilt {
            source,
            destination,
        } => serde_json::json!({
            "event": "item_built",
            "command": "build",
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
        }),

        BuildEvent::UnitWouldBuild {
            source,
            destination,
            command,
        } => serde_json::json!({
            "event": "item_would_build",
            "command": "build",
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
            "invocation": command,
        }),

        BuildEvent::UnitSkipped {
            source,
            destination,
            newer,
            dest_exists,
        } => serde_json::json!({
            "event": "item_skipped",
            "command": "build",
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
            "newer": newer,
            "dest_exists": dest_exists,
        }),

        BuildEvent::UnitFailed { source, code } => serde_json::json!({
            "event": "item_error",
            "command": "build",
            "source": source.display().to_string(),
            "exit_code": code,
        }),

        BuildEvent::IntermediateRemoved { path } => serde_json::json!({
            "event": "intermediate_removed",
            "command": "build",
            "path": path.display().to_string(),
        }),

        BuildEvent::Completed { built, skipped } => serde_json::json!({
            "event": "complete",
            "command": "build",
            "built": built,
            "skipped": skipped,
        }),
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.write_event(event_to_json(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_json_object_per_line() {
        let buffer = SharedBuffer::default();
        let sink = JsonEventSink::with_writer(buffer.clone());

        sink.on_event(BuildEvent::UnitBuilt {
            source: PathBuf::from("assets/models/foo.obj"),
            destination: PathBuf::from("out/models/foo.pmdl"),
        });
        sink.on_event(BuildEvent::Completed {
            built: 1,
            skipped: 0,
        });

        let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "item_built");
        assert_eq!(first["destination"], "out/models/foo.pmdl");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "complete");
        assert_eq!(second["built"], 1);
    }

    #[test]
    fn failed_unit_reports_null_code_for_signals() {
        let value = event_to_json(&BuildEvent::UnitFailed {
            source: PathBuf::from("a.vert"),
            code: None,
        });
        assert_eq!(value["event"], "item_error");
        assert!(value["exit_code"].is_null());
    }
}
