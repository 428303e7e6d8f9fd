//! purpl-assets - asset build orchestration for the Purpl engine
//!
//! Converts source assets (models, textures, shaders, fonts) into the
//! engine's packed formats by driving external tools, rebuilding only what
//! is stale. Also hosts the bulk dispatcher used by `dofiles` to run a
//! formatter or linter over a source tree.
//!
//! Layers:
//! - `domain` - value types, pure decisions, ports
//! - `application` - the build and dispatch use cases
//! - `infrastructure` - real file system, process runner, JSON events
//! - `ui` - terminal rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

pub use application::{
    AssetBuilder, AssetTreeWalker, BuildOutcome, BuildSummary, BulkDispatcher, DispatchOptions,
    DispatchReport,
};
pub use config::{BuildConfig, RunOptions, ToolPaths};
pub use domain::value_objects::{AssetCategory, HostPlatform, Tool};
pub use error::{BuildError, BuildResult};
