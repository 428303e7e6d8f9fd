//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `process/` - Child process execution
//! - `events/` - Machine-readable event output

pub mod events;
pub mod fs;
pub mod process;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::ProcessRunner;
