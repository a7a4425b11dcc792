//! Imprint CLI - inspect stylesheet import graphs.
//!
//! Parses arguments, initializes logging, and dispatches to the command
//! implementations in `imprint_cli::commands`.

use clap::Parser;
use imprint_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);
    ui::init_colors(no_color);

    let config = args.config.as_deref();
    let result = match args.command {
        cli::Command::Tree(tree_args) => commands::tree_execute(tree_args, config),
        cli::Command::Dependents(dependents_args) => {
            commands::dependents_execute(dependents_args, config)
        }
        cli::Command::Changed(changed_args) => commands::changed_execute(changed_args, config),
    };

    result.map_err(error::cli_error_to_miette)
}
