//! External tool identities
//!
//! Each tool is an opaque executable; only its name and the directory it is
//! looked up in are known here.

/// Which tool root an executable lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolRoot {
    /// `<repo tools>/<os>/<arch>`, shipped with the repository
    RepoNative,
    /// User-supplied tool directory (`--tools-dir` / `PURPL_TOOLS_DIR`)
    Generic,
}

/// The four external tools the asset build drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// GLSL to SPIR-V compiler
    Glslc,
    /// Mesh converter
    MeshTool,
    /// Texture converter
    TextureTool,
    /// Multi-channel SDF font atlas generator
    MsdfAtlasGen,
}

impl Tool {
    /// Executable name without platform suffix
    pub fn executable_stem(&self) -> &'static str {
        match self {
            Tool::Glslc => "glslc",
            Tool::MeshTool => "meshtool",
            Tool::TextureTool => "texturetool",
            Tool::MsdfAtlasGen => "msdf-atlas-gen",
        }
    }

    pub fn root(&self) -> ToolRoot {
        match self {
            Tool::Glslc | Tool::MsdfAtlasGen => ToolRoot::RepoNative,
            Tool::MeshTool | Tool::TextureTool => ToolRoot::Generic,
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.executable_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_and_font_tools_come_from_repo_native_root() {
        assert_eq!(Tool::Glslc.root(), ToolRoot::RepoNative);
        assert_eq!(Tool::MsdfAtlasGen.root(), ToolRoot::RepoNative);
    }

    #[test]
    fn mesh_and_texture_tools_come_from_generic_root() {
        assert_eq!(Tool::MeshTool.root(), ToolRoot::Generic);
        assert_eq!(Tool::TextureTool.root(), ToolRoot::Generic);
    }
}
