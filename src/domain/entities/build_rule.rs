//! Build rules
//!
//! One variant per tool family. A rule knows which tool it drives and how to
//! lay out that tool's argument vector for a source/destination pair.

use std::path::{Path, PathBuf};

use crate::domain::ports::ToolInvocation;
use crate::domain::services::ResolvedTools;
use crate::domain::value_objects::Tool;

/// How to turn a source into a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildRule {
    /// `meshtool to <src> <dest>`
    Mesh,
    /// `texturetool to <src> <dest>`
    Texture,
    /// `glslc <src> -o <dest>`
    Shader,
    /// `msdf-atlas-gen -font <src> -imageout <image> -json <dest> -charset <charset>`
    FontAtlas { image: PathBuf, charset: PathBuf },
    /// `texturetool to <atlas image> <dest>`; the font is only the staleness source
    FontTexture { atlas_image: PathBuf },
}

impl BuildRule {
    pub fn tool(&self) -> Tool {
        match self {
            BuildRule::Mesh => Tool::MeshTool,
            BuildRule::Texture | BuildRule::FontTexture { .. } => Tool::TextureTool,
            BuildRule::Shader => Tool::Glslc,
            BuildRule::FontAtlas { .. } => Tool::MsdfAtlasGen,
        }
    }

    /// Command line for building `destination` from `source`
    pub fn invocation(
        &self,
        tools: &ResolvedTools,
        source: &Path,
        destination: &Path,
    ) -> ToolInvocation {
        let program = tools.path(self.tool());
        match self {
            BuildRule::Mesh | BuildRule::Texture => ToolInvocation::new(program)
                .arg("to")
                .arg(source)
                .arg(destination),
            BuildRule::Shader => ToolInvocation::new(program)
                .arg(source)
                .arg("-o")
                .arg(destination),
            BuildRule::FontAtlas { image, charset } => ToolInvocation::new(program)
                .arg("-font")
                .arg(source)
                .arg("-imageout")
                .arg(image)
                .arg("-json")
                .arg(destination)
                .arg("-charset")
                .arg(charset),
            BuildRule::FontTexture { atlas_image } => ToolInvocation::new(program)
                .arg("to")
                .arg(atlas_image)
                .arg(destination),
        }
    }
}
