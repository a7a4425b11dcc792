//! Project configuration loaded from `imprint.toml` or `imprint.json`.
//!
//! Priority: environment (`IMPRINT_*`) > config file > defaults.
//!
//! ```toml
//! root = "styles"
//! exclude = ["node_modules", "vendor/"]
//! log_dependents = true
//!
//! [parsers]
//! ".less" = false
//! ".scss" = { basePaths = ["../shared"] }
//! ".styl" = { parserSteps = ['@import\s+"([^"]+)"'], postfixes = [".styl"] }
//! ```

mod loading;
mod tests;

use std::path::{Path, PathBuf};

use imprint::{ParserOverrides, ParserRegistry};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use loading::CONFIG_FILES;

/// Imprint CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImprintConfig {
    /// Project directory to scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Directory that printed paths are shown relative to (defaults to the root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_base: Option<PathBuf>,

    /// Only scan paths containing one of these substrings (all paths when empty)
    pub include: Vec<String>,

    /// Skip paths containing any of these substrings
    pub exclude: Vec<String>,

    /// Per-extension parser overrides layered onto the defaults
    pub parsers: ParserOverrides,

    /// Log every dependent an update produces
    pub log_dependents: bool,
}

impl Default for ImprintConfig {
    fn default() -> Self {
        Self {
            root: None,
            display_base: None,
            include: Vec::new(),
            exclude: vec!["node_modules".to_string(), ".git".to_string()],
            parsers: ParserOverrides::default(),
            log_dependents: false,
        }
    }
}

impl ImprintConfig {
    /// Default parsers with this config's overrides applied.
    pub fn registry(&self) -> Result<ParserRegistry, ConfigError> {
        let mut registry = ParserRegistry::with_defaults();
        registry
            .apply_overrides(&self.parsers)
            .map_err(ConfigError::Parsers)?;
        Ok(registry)
    }

    /// `path` contains one of the `exclude` substrings.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.exclude.iter().any(|pattern| path.contains(pattern.as_str()))
    }

    /// `include` is empty or `path` contains one of its substrings.
    pub fn is_included(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let path = path.to_string_lossy();
        self.include.iter().any(|pattern| path.contains(pattern.as_str()))
    }

    /// Make relative `root` and `display_base` absolute against `base`.
    pub(crate) fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.root, &mut self.display_base].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
