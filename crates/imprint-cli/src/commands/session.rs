//! Configuration, tracker construction and the population pass.

use std::fs;
use std::path::{Path, PathBuf};

use imprint::{DependencyTracker, NativeRuntime, Runtime, RuntimeError};
use walkdir::WalkDir;

use crate::config::ImprintConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// A populated tracker for one project directory.
#[derive(Debug)]
pub(crate) struct Session {
    pub root: PathBuf,
    pub display_base: PathBuf,
    pub config: ImprintConfig,
    pub tracker: DependencyTracker,
    cwd: PathBuf,
    runtime: NativeRuntime,
}

impl Session {
    /// Load configuration and build a tracker without scanning anything.
    ///
    /// The project root is, in order: `root`, the configured root, the
    /// current directory.
    pub fn open(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let requested = root.map(|root| cwd.join(root));

        let search_dir = requested.as_deref().unwrap_or(&cwd);
        let config = ImprintConfig::load(search_dir, config_path)?;

        let root = requested
            .or_else(|| config.root.clone())
            .unwrap_or_else(|| cwd.clone());
        let root = fs::canonicalize(&root).with_path(&root)?;
        if !root.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "project root {} is not a directory",
                root.display()
            )));
        }

        let display_base = match &config.display_base {
            Some(base) => canonicalize_lenient(base),
            None => root.clone(),
        };

        let tracker = DependencyTracker::new(config.registry()?)
            .with_log_dependents(config.log_dependents);

        Ok(Self {
            root,
            display_base,
            config,
            tracker,
            cwd,
            runtime: NativeRuntime::new(),
        })
    }

    /// Open a session and run the population pass.
    pub fn populated(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let session = Self::open(root, config_path)?;
        session.populate()?;
        Ok(session)
    }

    pub fn with_log_dependents(mut self, enabled: bool) -> Self {
        self.tracker = self.tracker.with_log_dependents(enabled);
        self
    }

    /// Feed every scannable file under the root to the tracker, in file-name order.
    ///
    /// This is the initial bulk pass: each update returns nothing because no
    /// file has been seen before. Returns the number of files fed.
    pub fn populate(&self) -> Result<usize> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.config.is_excluded(self.relative(entry.path())));

        let mut fed = 0;
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !self.is_registered(entry.path()) {
                continue;
            }
            if !self.config.is_included(self.relative(entry.path())) {
                continue;
            }

            let content = self
                .runtime
                .read_file(entry.path())
                .map_err(imprint::Error::from)?;
            self.tracker.update(entry.path(), Some(content.as_slice()))?;
            fed += 1;
        }

        tracing::info!(
            "Scanned {} under {} ({})",
            ui::count(fed, "file"),
            self.root.display(),
            ui::count(self.tracker.edge_count(), "edge")
        );
        if fed == 0 {
            ui::warning(&format!(
                "No files with a registered extension ({}) found",
                self.tracker.registry().extensions().collect::<Vec<_>>().join(", ")
            ));
        }
        Ok(fed)
    }

    /// Current content of a file, `None` if it no longer exists.
    pub fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match self.runtime.read_file(path) {
            Ok(content) => Ok(Some(content)),
            Err(RuntimeError::FileNotFound(_)) => Ok(None),
            Err(err) => Err(imprint::Error::from(err).into()),
        }
    }

    /// Resolve a file argument against the current directory.
    ///
    /// Existing files are canonicalized like the root is, so their paths
    /// match the ones found while scanning. For a deleted file only the
    /// parent directory is canonicalized.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        let absolute = self.cwd.join(file);
        if let Ok(canonical) = fs::canonicalize(&absolute) {
            return canonical;
        }
        match (absolute.parent(), absolute.file_name()) {
            (Some(parent), Some(name)) => fs::canonicalize(parent)
                .map(|parent| parent.join(name))
                .unwrap_or_else(|_| absolute.clone()),
            _ => absolute.clone(),
        }
    }

    /// Render a path relative to the display base.
    pub fn display(&self, path: &imprint::DependencyPath) -> String {
        path.display_relative(Some(&self.display_base)).into_owned()
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    fn is_registered(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.tracker.registry().contains(ext))
    }
}

fn canonicalize_lenient(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
