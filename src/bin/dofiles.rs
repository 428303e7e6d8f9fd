//! dofiles - run a command on every C/C++ source file in a tree
//!
//! Usage: dofiles [--root DIR] [--ext EXT]... <COMMAND>...
//!
//! Each matching file path is appended to COMMAND, e.g.
//! `dofiles clang-format -i` runs `clang-format -i <file>` per file.
//! Results are printed; failures never stop the walk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use purpl_assets::application::{BulkDispatcher, DispatchOptions};
use purpl_assets::infrastructure::{LocalFs, ProcessRunner};
use purpl_assets::ui::views::dispatch::render_dispatch_summary;
use purpl_assets::ui::{ColorWhen, ConsoleEventSink, UiContext};

/// dofiles - run a command on every source file under a directory
#[derive(Parser, Debug)]
#[command(name = "dofiles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to walk
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Extension to dispatch (repeatable; defaults to c, cpp and h)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Color output mode
    #[arg(long, value_enum)]
    color: Option<ColorWhen>,

    /// Command and leading arguments; the file path is appended
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    command: Vec<OsString>,
}

impl Cli {
    /// Walk root joined onto `cwd` when relative, with `.` segments dropped
    fn root_in(&self, cwd: &Path) -> PathBuf {
        if self.root.is_absolute() {
            self.root.clone()
        } else {
            cwd.join(&self.root).components().collect()
        }
    }

    fn dispatch_options(&self) -> DispatchOptions {
        if self.extensions.is_empty() {
            DispatchOptions::default()
        } else {
            DispatchOptions::default().with_extensions(&self.extensions)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    purpl_assets::logging::init(cli.verbose);

    if cli.command.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let root = cli.root_in(&cwd);

    let ui = UiContext::new(false, cli.verbose, cli.color);
    let sink = ConsoleEventSink::stdout(ui);
    let dispatcher = BulkDispatcher::new(
        LocalFs::new(),
        ProcessRunner::new(),
        &sink,
        cli.dispatch_options(),
    );

    let report = dispatcher.dispatch(&cli.command, &root);
    log::info!("dispatched {} files", report.total());
    if ui.verbose > 0 {
        print!("\n{}", render_dispatch_summary(&report, ui.color, ui.unicode));
    }
    Ok(())
}
