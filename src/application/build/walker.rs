//! Asset Tree Walker
//!
//! Orchestrates one asset build:
//! 1. Purge the output root if requested
//! 2. Walk each category subdirectory in order: models, textures, shaders, fonts
//! 3. Hand every discovered file to the builder (fonts go through the
//!    two-step font pipeline)
//!
//! The first failing unit ends the run; nothing after it is attempted.

use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, ToolPaths};
use crate::domain::entities::{BuildRule, BuildUnit};
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, ToolRunner};
use crate::domain::services::output_path_for;
use crate::domain::value_objects::AssetCategory;
use crate::error::BuildResult;

use super::builder::AssetBuilder;
use super::fonts::build_font;
use super::result::BuildSummary;

/// Walks the assets tree and builds everything that is stale
pub struct AssetTreeWalker<FS, TR, ES>
where
    FS: FileSystem,
    TR: ToolRunner,
    ES: BuildEventSink,
{
    builder: AssetBuilder<FS, TR, ES>,
    paths: ToolPaths,
}

impl<FS, TR, ES> AssetTreeWalker<FS, TR, ES>
where
    FS: FileSystem,
    TR: ToolRunner,
    ES: BuildEventSink,
{
    pub fn new(config: &BuildConfig, fs: FS, runner: TR, events: ES) -> Self {
        let tools = config.resolver().resolve_all();
        Self {
            builder: AssetBuilder::new(fs, runner, events, tools, config.options),
            paths: config.paths.clone(),
        }
    }

    /// Run the whole build
    pub fn run(&self) -> BuildResult<BuildSummary> {
        let options = *self.builder.options();
        self.builder.events().on_event(BuildEvent::Started {
            assets_root: self.paths.assets_root.clone(),
            output_root: self.paths.output_root.clone(),
            rebuild: options.rebuild,
            dry_run: options.dry_run,
        });

        let mut summary = BuildSummary::new();

        if options.purge {
            summary.purged = self.purge()?;
        }

        for category in AssetCategory::ALL {
            self.build_category(category, &mut summary)?;
        }

        self.builder.events().on_event(BuildEvent::Completed {
            built: summary.rebuilt_count(),
            skipped: summary.skipped.len(),
        });
        Ok(summary)
    }

    /// Delete the output root. A missing root is a no-op.
    fn purge(&self) -> BuildResult<bool> {
        let root = &self.paths.output_root;
        if self.builder.options().dry_run {
            log::info!("dry run: not purging {}", root.display());
            return Ok(false);
        }

        let existed = self.builder.fs().is_dir(root);
        if existed {
            self.builder.fs().remove_dir_all(root)?;
        } else {
            log::debug!("{} does not exist, nothing to purge", root.display());
        }
        self.builder.events().on_event(BuildEvent::Purged {
            path: root.clone(),
            existed,
        });
        Ok(existed)
    }

    fn build_category(
        &self,
        category: AssetCategory,
        summary: &mut BuildSummary,
    ) -> BuildResult<()> {
        let dir = self.paths.assets_root.join(category.subdir());
        if !self.builder.fs().is_dir(&dir) {
            log::debug!("no {} directory at {}", category, dir.display());
            return Ok(());
        }

        self.builder.events().on_event(BuildEvent::CategoryStarted {
            category,
            dir: dir.clone(),
        });

        for source in self.category_sources(category, &dir) {
            if category == AssetCategory::Fonts {
                build_font(
                    &self.builder,
                    &source,
                    &self.paths.assets_root,
                    &self.paths.output_root,
                    &self.paths.charset_path(),
                    summary,
                )?;
                continue;
            }

            let Some(unit) = self.unit_for(category, source) else {
                continue;
            };
            let outcome = self
                .builder
                .build(&unit.rule, &unit.source, &unit.destination)?;
            summary.record(outcome, unit.destination);
        }

        Ok(())
    }

    fn category_sources(&self, category: AssetCategory, dir: &Path) -> Vec<PathBuf> {
        self.builder
            .fs()
            .walk_files(dir)
            .into_iter()
            .filter(|path| category.accepts(path))
            .collect()
    }

    fn unit_for(&self, category: AssetCategory, source: PathBuf) -> Option<BuildUnit> {
        let rule = match category {
            AssetCategory::Models => BuildRule::Mesh,
            AssetCategory::Textures => BuildRule::Texture,
            AssetCategory::Shaders => BuildRule::Shader,
            AssetCategory::Fonts => return None,
        };
        let destination = output_path_for(
            category,
            &source,
            &self.paths.assets_root,
            &self.paths.output_root,
        )?;
        Some(BuildUnit::new(category, source, destination, rule))
    }
}
