//! Incremental reverse-dependency tracking.
//!
//! A [`DependencyTracker`] is built once per build session and fed every file
//! event the host pipeline sees. For each event it re-parses the file,
//! replaces that file's import edges, and, if the file was already known,
//! returns every file that transitively imports it so the host can rebuild
//! those too.
//!
//! # Path lifecycle
//!
//! ```text
//! Unseen ──referenced by an import──▶ PreTracked ──own event──▶ Observed ─┐
//!    │                                                            ▲       │
//!    └──────────────────own event─────────────────────────────────┘  ◀────┘
//! ```
//!
//! The first event for an unseen path returns `None`: that is assumed to be
//! the initial population pass, where every related file is going through the
//! pipeline anyway. A path that an earlier import pre-registered is treated as
//! already known, so its dependents come back on its first event.
//!
//! # Thread safety
//!
//! Each `update` runs entirely under one lock, so a tracker can be shared
//! behind an `Arc`. Calls are serialized, not parallelized.

mod report;
mod state;

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::Mutex;

use crate::config::ParserRegistry;
use crate::dep_path::DependencyPath;
use crate::error::Result;
use crate::extract::extract;
use crate::runtime::native::NativeRuntime;
use crate::runtime::{Runtime, RuntimeError};

pub use state::DependencyMap;
use state::TrackerState;

/// A dependent file the host should rebuild, with its current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentFile {
    pub path: DependencyPath,
    pub content: Vec<u8>,
}

/// Persistent dependency graph for one build session.
///
/// ```rust,no_run
/// use imprint::{DependencyTracker, ParserRegistry};
///
/// let tracker = DependencyTracker::new(ParserRegistry::with_defaults());
///
/// // initial pass: nothing to add
/// let main = "@import 'colors';".as_bytes();
/// assert!(tracker.update("/p/main.scss", Some(main)).unwrap().is_none());
///
/// // `_colors.scss` was pre-registered by the import above, so its change
/// // brings `main.scss` along
/// let rebuild = tracker.update("/p/_colors.scss", Some("$red: #f00;".as_bytes())).unwrap();
/// ```
#[derive(Debug)]
pub struct DependencyTracker {
    registry: ParserRegistry,
    runtime: Arc<dyn Runtime>,
    log_dependents: bool,
    state: Mutex<TrackerState>,
}

impl DependencyTracker {
    /// Create a tracker reading from the native file system.
    pub fn new(registry: ParserRegistry) -> Self {
        Self::with_runtime(registry, Arc::new(NativeRuntime::new()))
    }

    /// Create a tracker with a custom runtime.
    pub fn with_runtime(registry: ParserRegistry, runtime: Arc<dyn Runtime>) -> Self {
        Self {
            registry,
            runtime,
            log_dependents: false,
            state: Mutex::new(TrackerState::default()),
        }
    }

    /// Log every synthesized dependent at info level.
    pub fn with_log_dependents(mut self, enabled: bool) -> Self {
        self.log_dependents = enabled;
        self
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Process one file event, deriving the parser from the path's extension.
    ///
    /// `content` of `None` marks a file with no body (for example a deletion):
    /// the path is still tracked and its dependents still computed, but nothing
    /// is parsed.
    ///
    /// Returns `Ok(None)` for an untracked extension or a first sighting,
    /// otherwise the transitive dependents with their current content.
    pub fn update(
        &self,
        path: impl AsRef<Path>,
        content: Option<&[u8]>,
    ) -> Result<Option<Vec<DependentFile>>> {
        let file = DependencyPath::new(path)?;
        let extension = file.extension_key().unwrap_or_default();
        self.update_path(file, content, &extension)
    }

    /// Process one file event with an explicit extension key (e.g. `.scss`).
    pub fn update_with_extension(
        &self,
        path: impl AsRef<Path>,
        content: Option<&[u8]>,
        extension: &str,
    ) -> Result<Option<Vec<DependentFile>>> {
        let file = DependencyPath::new(path)?;
        self.update_path(file, content, extension)
    }

    fn update_path(
        &self,
        file: DependencyPath,
        content: Option<&[u8]>,
        extension: &str,
    ) -> Result<Option<Vec<DependentFile>>> {
        // Parse before locking so a failing step leaves the graph untouched.
        let extracted = match content {
            Some(bytes) => {
                let text = String::from_utf8_lossy(bytes);
                Some(extract(&self.registry, &file, &text, extension)?)
            }
            None => None,
        };

        let mut state = self.state.lock();
        let was_tracked = !state.tracked.insert(file.clone());

        if let Some(extracted) = extracted {
            let stale = state.remove_dependent(&file);

            let Some(dependencies) = extracted else {
                tracing::trace!(file = %file, "extension not tracked");
                return Ok(None);
            };

            tracing::debug!(
                file = %file,
                dependencies = dependencies.len(),
                stale_edges = stale,
                "updated imports"
            );

            for dependency in dependencies {
                if !state.tracked.contains(&dependency)
                    && !self.runtime.exists(dependency.as_path())
                {
                    tracing::trace!(dependency = %dependency, "pre-tracking forward reference");
                    state.tracked.insert(dependency.clone());
                }
                state.add_edge(dependency, file.clone());
            }
        }

        if !was_tracked {
            return Ok(None);
        }

        let dependents = state.collect_dependents(&file, self.runtime.as_ref());
        drop(state);

        self.materialize(&file, dependents).map(Some)
    }

    fn materialize(
        &self,
        file: &DependencyPath,
        dependents: IndexSet<DependencyPath>,
    ) -> Result<Vec<DependentFile>> {
        let mut files = Vec::with_capacity(dependents.len());
        for path in dependents {
            let content = match self.runtime.read_file(path.as_path()) {
                Ok(content) => content,
                Err(RuntimeError::FileNotFound(_)) => {
                    tracing::debug!(path = %path, "dependent vanished before it could be read");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if self.log_dependents {
                tracing::info!(changed = %file, dependent = %path, "rebuilding dependent");
            }
            files.push(DependentFile { path, content });
        }
        Ok(files)
    }

    /// Whether a path has been observed or referenced.
    pub fn is_tracked(&self, path: impl AsRef<Path>) -> bool {
        DependencyPath::new(path).is_ok_and(|path| self.state.lock().tracked.contains(&path))
    }

    pub fn tracked_count(&self) -> usize {
        self.state.lock().tracked.len()
    }

    /// Direct dependents of a path.
    pub fn dependents_of(&self, path: impl AsRef<Path>) -> Result<Vec<DependencyPath>> {
        let path = DependencyPath::new(path)?;
        Ok(self
            .state
            .lock()
            .dependents
            .get(&path)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Total number of dependency edges.
    pub fn edge_count(&self) -> usize {
        self.state.lock().dependents.values().map(IndexSet::len).sum()
    }

    /// Copy of the current dependency map.
    pub fn snapshot(&self) -> DependencyMap {
        self.state.lock().dependents.clone()
    }

    /// Render the whole dependency map as a tree.
    pub fn render_tree(&self, base: Option<&Path>) -> String {
        report::render_map(&self.state.lock().dependents, base)
    }

    /// Render the dependents of one path as a tree.
    pub fn render_dependents(
        &self,
        path: impl AsRef<Path>,
        recursive: bool,
        base: Option<&Path>,
    ) -> Result<String> {
        let path = DependencyPath::new(path)?;
        Ok(report::render_dependents(
            &self.state.lock().dependents,
            &path,
            recursive,
            base,
        ))
    }
}
