//! File-system abstraction used by the tracker.
//!
//! The tracker only ever asks two questions of the outside world: does a path
//! exist, and what are its current bytes. Both go through the [`Runtime`] trait
//! so hosts can plug in their own storage and tests can run against
//! [`MemoryRuntime`].

pub mod native;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Other runtime error
    #[error("Runtime error: {0}")]
    Other(String),
}

/// Platform runtime trait
///
/// Calls are synchronous and expected to be fast and local. Implementations
/// must be shareable across threads because a tracker may be.
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a file's current contents
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;
}
