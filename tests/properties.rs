//! Property tests for purpl-assets.
//!
//! Properties use randomized input generation to protect the staleness
//! rules and the output path derivation.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/staleness.rs"]
mod staleness;

#[path = "properties/output_path.rs"]
mod output_path;
