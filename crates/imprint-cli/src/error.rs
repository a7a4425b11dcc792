//! Error handling for the Imprint CLI.
//!
//! `CliError` is what every command returns. `main` converts it into a
//! [`miette::Report`] with [`cli_error_to_miette`], attaching a hint where
//! one helps.

use std::path::{Path, PathBuf};

use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file discovery or parsing failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracker rejected a path or failed to parse a file
    #[error(transparent)]
    Tracker(#[from] imprint::Error),

    /// Invalid command-line arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed during population
    #[error("Failed to walk project directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The merged configuration could not be deserialized
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A `[parsers]` entry could not be applied to the defaults
    #[error("Invalid parser override: {0}")]
    Parsers(#[source] imprint::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Invalid(err.to_string())
    }
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach a path to I/O failures.
pub trait ResultExt<T> {
    /// Turn a "not found" I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

/// Convert a [`CliError`] into a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::NotFound(path)) => miette::miette!(
            help = "Create imprint.toml in the project root or pass an existing file to --config",
            "Config file not found: {}",
            path.display()
        ),
        CliError::Config(ConfigError::Invalid(message)) => miette::miette!(
            help = "Check imprint.toml syntax and field types",
            "Invalid configuration: {}",
            message
        ),
        CliError::Config(ConfigError::Parsers(source)) => miette::miette!(
            help = "New extensions need at least one parserSteps pattern; use false to disable one",
            "Invalid parser override: {}",
            source
        ),
        CliError::Tracker(imprint::Error::InvalidArgument(message)) => miette::miette!(
            help = "File arguments are resolved against the current directory",
            "Invalid path: {}",
            message
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path, or pass --root to point at the project directory",
            "File not found: {}",
            path.display()
        ),
        other => miette::miette!("{}", other),
    }
}
