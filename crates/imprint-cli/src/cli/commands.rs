use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::OutputFormat;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full dependency map
    ///
    /// Every dependency is listed with the files that import it.
    Tree(TreeArgs),

    /// Print the files importing one file
    Dependents(DependentsArgs),

    /// Replay files as change events and print their rebuild lists
    ///
    /// Uses the current content of each file. A file that no longer exists is
    /// replayed as a deletion.
    Changed(ChangedArgs),
}

/// Arguments for the tree command
#[derive(Args, Debug, Default)]
pub struct TreeArgs {
    /// Project directory to scan (defaults to the configured root or the current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,
}

/// Arguments for the dependents command
#[derive(Args, Debug)]
pub struct DependentsArgs {
    /// File whose dependents should be listed
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Follow dependents of dependents
    #[arg(short, long)]
    pub recursive: bool,

    /// Project directory to scan
    #[arg(long, value_name = "ROOT")]
    pub root: Option<PathBuf>,
}

/// Arguments for the changed command
#[derive(Args, Debug)]
pub struct ChangedArgs {
    /// Files to replay as changed
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Project directory to scan
    #[arg(long, value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Log each rebuilt dependent as it is produced
    #[arg(long)]
    pub log_dependents: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
