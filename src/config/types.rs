//! Configuration types

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::services::{native_tools_dir, CommandResolver};
use crate::domain::value_objects::HostPlatform;

/// Flags that shape a run; immutable once arguments are parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print captured tool output
    pub verbose: bool,
    /// Rebuild every asset regardless of timestamps
    pub rebuild: bool,
    /// Delete the output root before building
    pub purge: bool,
    /// Report what would be built without running any tool
    pub dry_run: bool,
}

/// Directory roots for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub assets_root: PathBuf,
    pub output_root: PathBuf,
    /// User-supplied generic tool root
    pub tools_root: PathBuf,
    /// `<repo tools>/<os>/<arch>`
    pub native_tools_root: PathBuf,
}

impl ToolPaths {
    pub fn new(
        assets_root: PathBuf,
        output_root: PathBuf,
        tools_root: PathBuf,
        repo_tools_root: PathBuf,
        platform: &HostPlatform,
    ) -> Self {
        let native_tools_root = native_tools_dir(&repo_tools_root, platform);
        Self {
            assets_root,
            output_root,
            tools_root,
            native_tools_root,
        }
    }

    /// Charset file handed to the font atlas generator
    pub fn charset_path(&self) -> PathBuf {
        self.assets_root.join("fonts").join("charset.txt")
    }
}

/// Fully resolved configuration for an asset build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub paths: ToolPaths,
    pub options: RunOptions,
    pub platform: HostPlatform,
}

impl BuildConfig {
    pub fn resolver(&self) -> CommandResolver {
        CommandResolver::new(
            &self.platform,
            self.paths.native_tools_root.clone(),
            self.paths.tools_root.clone(),
        )
    }
}

/// Contents of `purpl-assets.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub tools: ToolsSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolsSection {
    /// Generic tool root
    pub dir: Option<PathBuf>,
    /// Repository tool root
    pub repo_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub dir: Option<PathBuf>,
}

impl FileConfig {
    /// Make relative paths relative to the directory holding the config file
    pub fn rebased(mut self, base: &Path) -> Self {
        let rebase = |p: Option<PathBuf>| p.map(|p| base.join(p));
        self.tools.dir = rebase(self.tools.dir);
        self.tools.repo_dir = rebase(self.tools.repo_dir);
        self.output.dir = rebase(self.output.dir);
        self
    }
}
