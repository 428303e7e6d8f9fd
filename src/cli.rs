//! CLI Argument Parsing
//!
//! Flags mirror the config file and environment layers: anything given here
//! wins over `PURPL_TOOLS_DIR` / `PURPL_REPO_TOOLS_DIR` and
//! `purpl-assets.toml`.

use std::path::PathBuf;

use clap::Parser;

use purpl_assets::config::{CliOverrides, RunOptions};
use purpl_assets::ui::ColorWhen;

/// purpl-assets - build packed engine assets from source assets
#[derive(Parser, Debug)]
#[command(name = "purpl-assets")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The tools directory can also be set with PURPL_TOOLS_DIR.")]
pub struct Cli {
    /// Assets directory (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Output directory (defaults to <assets>/out)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Repository tools directory (defaults to <assets>/../tools)
    #[arg(short = 'R', long, value_name = "DIR")]
    pub repo_tools_dir: Option<PathBuf>,

    /// Directory holding meshtool and texturetool
    #[arg(short, long, value_name = "DIR")]
    pub tools_dir: Option<PathBuf>,

    /// Config file (defaults to <assets>/purpl-assets.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v prints tool output, -vv enables debug logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Rebuild everything regardless of timestamps
    #[arg(short, long)]
    pub rebuild: bool,

    /// Delete the output directory before building
    #[arg(short, long)]
    pub purge: bool,

    /// Show what would be built without running any tool
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            verbose: self.verbose > 0,
            rebuild: self.rebuild,
            purge: self.purge,
            dry_run: self.dry_run,
        }
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            assets_dir: self.assets_dir.clone(),
            output_dir: self.output_dir.clone(),
            repo_tools_dir: self.repo_tools_dir.clone(),
            tools_dir: self.tools_dir.clone(),
            config_file: self.config.clone(),
            options: self.run_options(),
        }
    }
}
