//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod dispatch_events;
pub mod file_system;
pub mod tool_runner;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use dispatch_events::{DispatchEvent, DispatchEventSink};
pub use file_system::FileSystem;
pub use tool_runner::{ToolInvocation, ToolOutput, ToolRunner};

#[cfg(test)]
pub(crate) mod fakes;
