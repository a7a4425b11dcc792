//! In-memory runtime for tests.
//!
//! Lets tests create and delete files without touching the disk, so
//! forward references and deleted dependents can be exercised deterministically.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use super::{Runtime, RuntimeError, RuntimeResult};

/// In-memory file system keyed by absolute path.
///
/// Clones share the same storage, so a test can hand one clone to a tracker
/// and keep mutating files through another.
///
/// ```rust,ignore
/// use imprint::{MemoryRuntime, Runtime};
/// use std::path::Path;
///
/// let fs = MemoryRuntime::new();
/// fs.write("/p/a.scss", "@import 'b';");
/// assert!(fs.exists(Path::new("/p/a.scss")));
/// fs.remove("/p/a.scss");
/// assert!(!fs.exists(Path::new("/p/a.scss")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRuntime {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a file.
    pub fn write(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        self.files
            .write()
            .insert(path.as_ref().to_path_buf(), content.as_ref().to_vec());
    }

    /// Delete a file. Returns `true` if it existed.
    pub fn remove(&self, path: impl AsRef<Path>) -> bool {
        self.files.write().remove(path.as_ref()).is_some()
    }
}

impl Runtime for MemoryRuntime {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().contains_key(path)
    }

    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))
    }
}
