//! Font pipeline
//!
//! A font goes through two tools: the atlas generator writes a metadata
//! JSON plus an intermediate PNG, then the texture converter packs the PNG.
//! Staleness for both steps is measured against the font file. The packing
//! step is forced whenever a fresh atlas was produced, and the atlas is
//! forced when the packed texture is stale but its PNG input is gone, so a
//! regenerated atlas always reaches the `.ptex`.

use std::path::{Path, PathBuf};

use crate::domain::entities::BuildRule;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, ToolRunner};
use crate::domain::services::{font_outputs, Freshness};
use crate::error::BuildResult;

use super::builder::AssetBuilder;
use super::result::BuildSummary;

/// Build one font file into `<stem>.json` and `<stem>.ptex`
pub fn build_font<FS, TR, ES>(
    builder: &AssetBuilder<FS, TR, ES>,
    font: &Path,
    assets_root: &Path,
    output_root: &Path,
    charset: &Path,
    summary: &mut BuildSummary,
) -> BuildResult<()>
where
    FS: FileSystem,
    TR: ToolRunner,
    ES: BuildEventSink,
{
    let Some(outputs) = font_outputs(font, assets_root, output_root) else {
        log::warn!("{} is outside {}, skipping", font.display(), assets_root.display());
        return Ok(());
    };

    let rebuild = builder.options().rebuild;
    let texture_stale =
        Freshness::capture(builder.fs(), font, &outputs.texture).requires_build(rebuild);
    let atlas_missing = !builder.fs().exists(&outputs.image);

    let atlas_rule = BuildRule::FontAtlas {
        image: outputs.image.clone(),
        charset: charset.to_path_buf(),
    };
    let atlas = builder.build_forced(
        &atlas_rule,
        font,
        &outputs.metadata,
        texture_stale && atlas_missing,
    )?;
    summary.record(atlas, outputs.metadata.clone());

    let texture_rule = BuildRule::FontTexture {
        atlas_image: outputs.image.clone(),
    };
    let texture = builder.build_forced(&texture_rule, font, &outputs.texture, atlas.rebuilt())?;
    summary.record(texture, outputs.texture.clone());

    if !builder.options().dry_run {
        if let Some(removed) = remove_intermediate(builder.fs(), &outputs.image)? {
            builder.events().on_event(BuildEvent::IntermediateRemoved {
                path: removed.clone(),
            });
            summary.removed_intermediates.push(removed);
        }
    }

    Ok(())
}

fn remove_intermediate(fs: &impl FileSystem, image: &Path) -> BuildResult<Option<PathBuf>> {
    if !fs.exists(image) {
        return Ok(None);
    }
    fs.remove_file(image)?;
    Ok(Some(image.to_path_buf()))
}
