//! Command resolver
//!
//! Maps a logical tool to the absolute path of its executable for the host
//! platform.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{HostPlatform, Tool, ToolRoot};

/// Per-platform tool directory: `<repo tools>/<os>/<arch>`
pub fn native_tools_dir(repo_tools_root: &Path, platform: &HostPlatform) -> PathBuf {
    repo_tools_root
        .join(platform.os())
        .join(platform.normalized_arch())
}

/// Resolves tool executables against the two tool roots
#[derive(Debug, Clone)]
pub struct CommandResolver {
    exe_suffix: &'static str,
    native_root: PathBuf,
    generic_root: PathBuf,
}

impl CommandResolver {
    pub fn new(platform: &HostPlatform, native_root: PathBuf, generic_root: PathBuf) -> Self {
        Self {
            exe_suffix: platform.exe_suffix(),
            native_root,
            generic_root,
        }
    }

    /// `<root>/<name><suffix>` for one tool
    pub fn resolve(&self, tool: Tool) -> PathBuf {
        let root = match tool.root() {
            ToolRoot::RepoNative => &self.native_root,
            ToolRoot::Generic => &self.generic_root,
        };
        root.join(format!("{}{}", tool.executable_stem(), self.exe_suffix))
    }

    /// Resolve every tool once, up front
    pub fn resolve_all(&self) -> ResolvedTools {
        ResolvedTools {
            glslc: self.resolve(Tool::Glslc),
            meshtool: self.resolve(Tool::MeshTool),
            texturetool: self.resolve(Tool::TextureTool),
            msdf_atlas_gen: self.resolve(Tool::MsdfAtlasGen),
        }
    }
}

/// Executable paths for all four tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTools {
    pub glslc: PathBuf,
    pub meshtool: PathBuf,
    pub texturetool: PathBuf,
    pub msdf_atlas_gen: PathBuf,
}

impl ResolvedTools {
    pub fn path(&self, tool: Tool) -> &Path {
        match tool {
            Tool::Glslc => &self.glslc,
            Tool::MeshTool => &self.meshtool,
            Tool::TextureTool => &self.texturetool,
            Tool::MsdfAtlasGen => &self.msdf_atlas_gen,
        }
    }
}
