//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//! - the console sink lives with the rest of the terminal UI in `ui`

mod json;

pub use json::{event_to_json, JsonEventSink};
