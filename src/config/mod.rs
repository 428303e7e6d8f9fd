//! Configuration module
//!
//! Each value is resolved from, in priority order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`PURPL_TOOLS_DIR`, `PURPL_REPO_TOOLS_DIR`)
//! 3. `purpl-assets.toml` in the assets root (or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, CliOverrides, ConfigWarning, EnvOverrides, CONFIG_FILE_NAME,
    REPO_TOOLS_DIR_ENV, TOOLS_DIR_ENV,
};
pub use types::{BuildConfig, FileConfig, OutputSection, RunOptions, ToolPaths, ToolsSection};
