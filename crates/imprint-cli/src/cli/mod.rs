//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `imprint tree [ROOT]` - Print the whole dependency map
//! - `imprint dependents <FILE>` - Print who imports one file
//! - `imprint changed <FILE>...` - Print what a change to each file would rebuild

mod commands;
mod enums;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{ChangedArgs, Command, DependentsArgs, TreeArgs};
pub use enums::OutputFormat;

/// Imprint - stylesheet import graph inspector
#[derive(Parser, Debug)]
#[command(
    name = "imprint",
    version,
    about = "Inspect stylesheet import graphs and rebuild lists",
    long_about = "Imprint walks a project, extracts @import/@use/@forward references from\n\
                  .pcss, .less, .scss and .sass files (plus any configured extensions), and\n\
                  reports which files would have to be rebuilt when another one changes."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (defaults to imprint.toml or imprint.json in the project root)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
