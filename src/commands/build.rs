//! Build command handler
//!
//! Resolves configuration, wires the real adapters into the tree walker and
//! renders the result.

use anyhow::{Context, Result};

use purpl_assets::application::AssetTreeWalker;
use purpl_assets::config::{self, EnvOverrides};
use purpl_assets::domain::value_objects::HostPlatform;
use purpl_assets::infrastructure::{JsonEventSink, LocalFs, ProcessRunner};
use purpl_assets::ui::output::print_config_warnings;
use purpl_assets::ui::views::build::render_build_summary;
use purpl_assets::ui::{ConsoleEventSink, UiContext};

use crate::cli::Cli;

/// Execute the asset build
pub fn cmd_build(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let platform = HostPlatform::current();
    log::debug!("host platform {}", platform);

    let (config, warnings) =
        config::resolve(cli.overrides(), EnvOverrides::from_env(), &cwd, platform)?;
    print_config_warnings(&warnings, &ui);

    let fs = LocalFs::new();
    let runner = ProcessRunner::new();

    if ui.json {
        let sink = JsonEventSink::stdout();
        AssetTreeWalker::new(&config, fs, runner, sink).run()?;
        return Ok(());
    }

    let sink = ConsoleEventSink::stdout(ui);
    let summary = AssetTreeWalker::new(&config, fs, runner, &sink).run()?;
    print!(
        "\n{}",
        render_build_summary(&summary, config.options.dry_run, ui.color, ui.unicode)
    );
    Ok(())
}
