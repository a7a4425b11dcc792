//! Imprint CLI - inspect the import graph of a stylesheet project.
//!
//! The CLI plays the part of a build pipeline for inspection purposes: it
//! walks a project directory, feeds every file with a registered extension
//! through an [`imprint::DependencyTracker`], and then prints what the
//! tracker learned.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - `imprint.toml` / `imprint.json` loading with figment
//! - [`commands`] - `tree`, `dependents` and `changed`
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use imprint_cli::{commands, error::Result, logger};
//! use imprint_cli::cli::TreeArgs;
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     commands::tree_execute(TreeArgs { root: Some("styles".into()) }, None)
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use config::ImprintConfig;
pub use error::{CliError, ConfigError, Result, ResultExt};
