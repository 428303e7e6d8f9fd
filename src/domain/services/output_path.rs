//! Output path derivation
//!
//! Output paths mirror the input tree: the assets root prefix is swapped for
//! the output root and the extension is replaced per category. Everything
//! here is a pure function of its arguments.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{
    AssetCategory, FONT_IMAGE_EXTENSION, FONT_METADATA_EXTENSION, MODEL_EXTENSION,
    SHADER_EXTENSION, TEXTURE_EXTENSION,
};

/// Outputs produced from one font file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOutputs {
    /// Atlas metadata (`<stem>.json`)
    pub metadata: PathBuf,
    /// Intermediate atlas image (`<stem>.png`), deleted after packing
    pub image: PathBuf,
    /// Packed atlas texture (`<stem>.ptex`)
    pub texture: PathBuf,
}

/// Directory in the output tree that mirrors the source file's directory.
///
/// Returns `None` if `source` is not below `assets_root`.
pub fn mirror_dir(source: &Path, assets_root: &Path, output_root: &Path) -> Option<PathBuf> {
    let parent = source.parent()?;
    let relative = parent.strip_prefix(assets_root).ok()?;
    Some(output_root.join(relative))
}

/// Final output path for a source file of the given category.
///
/// For fonts this is the packed texture; see [`font_outputs`] for the
/// intermediates.
pub fn output_path_for(
    category: AssetCategory,
    source: &Path,
    assets_root: &Path,
    output_root: &Path,
) -> Option<PathBuf> {
    let dir = mirror_dir(source, assets_root, output_root)?;
    let file_name = source.file_name()?;

    let output = match category {
        AssetCategory::Models => dir.join(file_name).with_extension(MODEL_EXTENSION),
        AssetCategory::Textures => dir.join(file_name).with_extension(TEXTURE_EXTENSION),
        AssetCategory::Shaders => {
            let mut name = OsString::from(file_name);
            name.push(".");
            name.push(SHADER_EXTENSION);
            dir.join(name)
        }
        AssetCategory::Fonts => font_outputs(source, assets_root, output_root)?.texture,
    };
    Some(output)
}

/// Output paths for a font file. Font outputs use the lowercased file stem.
pub fn font_outputs(source: &Path, assets_root: &Path, output_root: &Path) -> Option<FontOutputs> {
    let dir = mirror_dir(source, assets_root, output_root)?;
    let lowered = source.file_name()?.to_string_lossy().to_lowercase();
    let base = dir.join(lowered);

    Some(FontOutputs {
        metadata: base.with_extension(FONT_METADATA_EXTENSION),
        image: base.with_extension(FONT_IMAGE_EXTENSION),
        texture: base.with_extension(TEXTURE_EXTENSION),
    })
}
