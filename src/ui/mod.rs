//! Terminal presentation
//!
//! Everything the binaries print goes through here: semantic colors and
//! icons (`theme`, `primitives`), reusable blocks, per-command views and the
//! console event sink that ties them to the build and dispatch events.

pub mod blocks;
pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

pub use console::ConsoleEventSink;
pub use context::{ColorWhen, UiContext};
