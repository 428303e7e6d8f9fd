//! purpl-assets - incremental asset builder
//!
//! Usage: purpl-assets [-a DIR] [-o DIR] [-R DIR] [-t DIR] [-v] [-r] [-p]

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    purpl_assets::logging::init(cli.verbose);

    if let Err(err) = commands::build::cmd_build(&cli) {
        purpl_assets::ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
