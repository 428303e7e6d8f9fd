//! Property tests for output path derivation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use purpl_assets::domain::services::{font_outputs, output_path_for};
use purpl_assets::AssetCategory;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn category() -> impl Strategy<Value = AssetCategory> {
    prop_oneof![
        Just(AssetCategory::Models),
        Just(AssetCategory::Textures),
        Just(AssetCategory::Shaders),
        Just(AssetCategory::Fonts),
    ]
}

fn source_in(
    assets: &Path,
    category: AssetCategory,
    dirs: &[String],
    stem: &str,
    ext: &str,
) -> PathBuf {
    let mut path = assets.join(category.subdir());
    for dir in dirs {
        path.push(dir);
    }
    path.push(format!("{stem}.{ext}"));
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: derivation is deterministic and lands under the output root,
    /// mirroring the source's directory.
    #[test]
    fn property_output_mirrors_source_tree(
        category in category(),
        dirs in proptest::collection::vec(segment(), 0..4),
        stem in segment(),
        ext in "[a-z]{1,4}",
    ) {
        let assets = PathBuf::from("/work/assets");
        let out = PathBuf::from("/work/assets/out");
        let source = source_in(&assets, category, &dirs, &stem, &ext);

        let first = output_path_for(category, &source, &assets, &out).unwrap();
        let second = output_path_for(category, &source, &assets, &out).unwrap();
        prop_assert_eq!(&first, &second);

        let relative_source_dir = source.parent().unwrap().strip_prefix(&assets).unwrap();
        prop_assert_eq!(first.parent().unwrap(), out.join(relative_source_dir));
    }

    /// PROPERTY: each category's output carries its fixed extension.
    #[test]
    fn property_output_extension_per_category(
        category in category(),
        stem in segment(),
        ext in "[a-z]{1,4}",
    ) {
        let assets = PathBuf::from("/work/assets");
        let out = PathBuf::from("/work/out");
        let source = source_in(&assets, category, &[], &stem, &ext);
        let output = output_path_for(category, &source, &assets, &out).unwrap();
        let name = output.file_name().unwrap().to_string_lossy().into_owned();

        let expected = match category {
            AssetCategory::Models => format!("{stem}.pmdl"),
            AssetCategory::Textures => format!("{stem}.ptex"),
            AssetCategory::Shaders => format!("{stem}.{ext}.spv"),
            AssetCategory::Fonts => format!("{}.ptex", stem.to_lowercase()),
        };
        prop_assert_eq!(name, expected);
    }

    /// PROPERTY: font outputs share one lowercased stem.
    #[test]
    fn property_font_outputs_share_stem(stem in segment()) {
        let assets = PathBuf::from("/work/assets");
        let out = PathBuf::from("/work/out");
        let source = assets.join("fonts").join(format!("{stem}.ttf"));
        let outputs = font_outputs(&source, &assets, &out).unwrap();

        let lowered = stem.to_lowercase();
        prop_assert_eq!(outputs.metadata, out.join("fonts").join(format!("{lowered}.json")));
        prop_assert_eq!(outputs.image, out.join("fonts").join(format!("{lowered}.png")));
        prop_assert_eq!(outputs.texture, out.join("fonts").join(format!("{lowered}.ptex")));
    }
}
