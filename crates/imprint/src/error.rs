//! Error types for extraction, configuration and tracking.

use thiserror::Error;

use crate::runtime::RuntimeError;

/// Boxed error returned by callback extraction steps.
pub type StepError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for imprint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for imprint operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller handed the tracker an unusable file path.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A parser configuration could not be registered.
    #[error("Configuration error for '{extension}': {reason}")]
    Configuration {
        /// Extension key the configuration was registered under
        extension: String,
        /// What was wrong with it
        reason: String,
    },

    /// An extraction step failed while reducing file content.
    #[error("Extraction step '{step}' failed for '{extension}': {source}")]
    Extraction {
        /// Extension whose pipeline was running
        extension: String,
        /// Name of the failing step
        step: String,
        #[source]
        source: StepError,
    },

    /// A capture pattern did not compile.
    #[error("Invalid capture pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// File-system collaborator failure.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    pub(crate) fn configuration(extension: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            extension: extension.into(),
            reason: reason.into(),
        }
    }
}
