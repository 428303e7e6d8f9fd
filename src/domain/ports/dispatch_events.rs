//! Dispatch Event Port
//!
//! Progress of a bulk command dispatch. Every event is informational; nothing
//! a command does can stop the walk.

use std::path::PathBuf;

use super::tool_runner::{ToolInvocation, ToolOutput};

/// Event emitted while dispatching a command over a source tree
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// A command finished (successfully or not)
    Finished {
        file: PathBuf,
        invocation: ToolInvocation,
        output: ToolOutput,
    },

    /// The command could not be started for this file
    SpawnFailed {
        file: PathBuf,
        invocation: ToolInvocation,
        message: String,
    },
}

/// Trait for receiving dispatch events
pub trait DispatchEventSink {
    fn on_event(&self, event: DispatchEvent);
}

impl<T: DispatchEventSink + ?Sized> DispatchEventSink for &T {
    fn on_event(&self, event: DispatchEvent) {
        (**self).on_event(event)
    }
}
