use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Normalized absolute path of a file that takes part in the dependency graph.
///
/// Normalization is purely lexical (`.` and `..` segments are folded, duplicate
/// separators collapsed). Nothing is canonicalized against the file system,
/// because the graph routinely holds paths of files that do not exist yet.
/// Equality is therefore exact path equality on the cleaned form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyPath(PathBuf);

impl DependencyPath {
    /// Normalize an absolute path.
    ///
    /// Fails with [`Error::InvalidArgument`] for empty or relative input.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("file path is empty".to_string()));
        }

        if !is_absolute(path) {
            return Err(Error::InvalidArgument(format!(
                "file path must be absolute: {}",
                path.display()
            )));
        }

        Ok(Self(path.clean()))
    }

    /// Resolve `candidate` against `base_dir` unless it is already absolute.
    pub(crate) fn resolve(base_dir: &Path, candidate: &Path) -> Self {
        if is_absolute(candidate) {
            Self(candidate.clean())
        } else {
            Self(base_dir.join(candidate).clean())
        }
    }

    /// Returns the underlying path representation.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume the identifier and return the owned path.
    pub fn into_path(self) -> PathBuf {
        self.0
    }

    /// Directory containing this file, used to resolve relative imports.
    pub fn parent_dir(&self) -> &Path {
        self.0.parent().unwrap_or(&self.0)
    }

    /// Lower-cased extension including the leading dot (e.g. `.scss`).
    pub fn extension_key(&self) -> Option<String> {
        self.0
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
    }

    /// Borrow the path as a string for logging/serialization.
    pub fn path_string(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    /// Render relative to `base` when the path lives inside it, otherwise absolute.
    pub fn display_relative(&self, base: Option<&Path>) -> Cow<'_, str> {
        match base.and_then(|base| self.0.strip_prefix(base).ok()) {
            Some(rel) if !rel.as_os_str().is_empty() => {
                Cow::Owned(rel.to_string_lossy().into_owned())
            }
            _ => self.path_string(),
        }
    }
}

/// A path is treated as absolute when it has a root (`/x`, `\x`) or a drive prefix (`C:\x`).
pub(crate) fn is_absolute(path: &Path) -> bool {
    path.is_absolute() || path.has_root() || has_drive_prefix(&path.to_string_lossy())
}

fn has_drive_prefix(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_string())
    }
}

impl AsRef<Path> for DependencyPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Serialize for DependencyPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.path_string())
    }
}
