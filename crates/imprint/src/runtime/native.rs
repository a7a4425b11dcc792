//! Native runtime backed by `std::fs`.

// NativeRuntime is the one place allowed to touch the OS file system
#![allow(clippy::disallowed_methods)]

use std::path::Path;

use super::{Runtime, RuntimeError, RuntimeResult};

/// Native filesystem Runtime implementation using `std::fs`.
///
/// # Example
///
/// ```rust,no_run
/// use imprint::{NativeRuntime, Runtime};
/// use std::path::Path;
///
/// let runtime = NativeRuntime::new();
/// if runtime.exists(Path::new("/project/src/main.scss")) {
///     let bytes = runtime.read_file(Path::new("/project/src/main.scss")).unwrap();
///     println!("{} bytes", bytes.len());
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NativeRuntime;

impl NativeRuntime {
    /// Create a new NativeRuntime instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime for NativeRuntime {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RuntimeError::FileNotFound(path.to_path_buf())
            } else {
                RuntimeError::Io(format!("Failed to read {}: {}", path.display(), e))
            }
        })
    }
}
