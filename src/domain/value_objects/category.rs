//! Asset category value object
//!
//! A category is a subdirectory of the assets root whose files share one
//! conversion tool and one output naming rule.

use std::path::{Path, PathBuf};

/// Asset categories, in build order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Models,
    Textures,
    Shaders,
    Fonts,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Models,
        AssetCategory::Textures,
        AssetCategory::Shaders,
        AssetCategory::Fonts,
    ];

    /// Subdirectory of the assets root scanned for this category
    pub fn subdir(&self) -> PathBuf {
        match self {
            AssetCategory::Models => PathBuf::from("models"),
            AssetCategory::Textures => PathBuf::from("textures"),
            AssetCategory::Shaders => Path::new("shaders").join("vulkan"),
            AssetCategory::Fonts => PathBuf::from("fonts"),
        }
    }

    /// Whether a discovered file is an input for this category
    pub fn accepts(&self, path: &Path) -> bool {
        match self {
            AssetCategory::Fonts => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    FONT_EXTENSIONS
                        .iter()
                        .any(|font| ext.eq_ignore_ascii_case(font))
                }),
            _ => true,
        }
    }

    /// Human-readable name used in progress output
    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Models => "models",
            AssetCategory::Textures => "textures",
            AssetCategory::Shaders => "shaders",
            AssetCategory::Fonts => "fonts",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Extension of packed models
pub const MODEL_EXTENSION: &str = "pmdl";
/// Extension of packed textures
pub const TEXTURE_EXTENSION: &str = "ptex";
/// Extension appended to compiled shaders
pub const SHADER_EXTENSION: &str = "spv";
/// Extension of font atlas metadata
pub const FONT_METADATA_EXTENSION: &str = "json";
/// Extension of the intermediate font atlas image
pub const FONT_IMAGE_EXTENSION: &str = "png";
