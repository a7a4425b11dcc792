//! Per-extension parser configuration.
//!
//! A [`ParserRegistry`] maps file extensions (with leading dot, matched
//! case-insensitively) to a [`ParserConfig`]: the ordered extraction steps plus
//! the prefix, postfix and base-path lists used for candidate expansion.
//!
//! ```rust
//! use imprint::{ParserConfig, ParserRegistry};
//!
//! let mut registry = ParserRegistry::with_defaults();
//! registry
//!     .register(
//!         ".styl",
//!         ParserConfig::new()
//!             .with_pattern(r#"@import\s+["']([^"']+)["']"#)
//!             .unwrap()
//!             .with_postfixes([".styl"]),
//!     )
//!     .unwrap();
//!
//! assert!(registry.get(".STYL").is_some());
//! ```

mod defaults;
mod overrides;

use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::extract::{ExtractionStep, PatternStep};

pub use overrides::{ParserOverride, ParserOverrides, ParserSpec};

/// Extraction and expansion settings for one file extension.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    steps: Vec<Arc<dyn ExtractionStep>>,
    prefixes: Vec<String>,
    postfixes: Vec<String>,
    base_paths: Vec<PathBuf>,
}

impl ParserConfig {
    /// Create an empty configuration. It must gain at least one step before
    /// it can be registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extraction step.
    pub fn with_step(mut self, step: impl ExtractionStep + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Append a capture-pattern step.
    pub fn with_pattern(self, pattern: &str) -> Result<Self> {
        Ok(self.with_step(PatternStep::new(pattern)?))
    }

    /// Replace the step list wholesale.
    pub fn with_steps(mut self, steps: Vec<Arc<dyn ExtractionStep>>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_postfixes<I, S>(mut self, postfixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.postfixes = postfixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_base_paths<I, P>(mut self, base_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.base_paths = base_paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn steps(&self) -> &[Arc<dyn ExtractionStep>] {
        &self.steps
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn postfixes(&self) -> &[String] {
        &self.postfixes
    }

    pub fn base_paths(&self) -> &[PathBuf] {
        &self.base_paths
    }
}

/// Extension-keyed set of parser configurations.
#[derive(Debug, Clone, Default)]
pub struct ParserRegistry {
    parsers: IndexMap<String, ParserConfig>,
}

impl ParserRegistry {
    /// A registry with no supported extensions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry carrying the built-in `.pcss`, `.less`, `.scss` and `.sass` parsers.
    pub fn with_defaults() -> Self {
        let mut parsers = IndexMap::new();
        for (extension, config) in defaults::default_parsers() {
            parsers.insert(extension.to_string(), config);
        }
        Self { parsers }
    }

    /// Register (or replace) the parser for an extension.
    ///
    /// Fails if the configuration has no extraction steps.
    pub fn register(&mut self, extension: &str, config: ParserConfig) -> Result<()> {
        let key = normalize_extension(extension)?;
        if config.steps.is_empty() {
            return Err(Error::configuration(
                key,
                "at least one extraction step is required",
            ));
        }
        self.parsers.insert(key, config);
        Ok(())
    }

    /// Drop support for an extension.
    pub fn remove(&mut self, extension: &str) -> Option<ParserConfig> {
        let key = normalize_extension(extension).ok()?;
        self.parsers.shift_remove(&key)
    }

    /// Look up the parser for an extension, ignoring case and a missing dot.
    pub fn get(&self, extension: &str) -> Option<&ParserConfig> {
        let key = normalize_extension(extension).ok()?;
        self.parsers.get(&key)
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.get(extension).is_some()
    }

    /// Registered extension keys in registration order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Layer declarative overrides onto this registry.
    ///
    /// Either every entry applies or the registry is left untouched.
    pub fn apply_overrides(&mut self, overrides: &ParserOverrides) -> Result<()> {
        let mut next = self.clone();
        for (extension, value) in overrides.iter() {
            overrides::apply_one(&mut next, extension, value.as_ref())?;
        }
        *self = next;
        Ok(())
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut ParserConfig> {
        self.parsers.get_mut(key)
    }

    pub(crate) fn insert_unchecked(&mut self, key: String, config: ParserConfig) {
        self.parsers.insert(key, config);
    }
}

/// Lower-case the extension and make sure it carries a leading dot.
pub(crate) fn normalize_extension(extension: &str) -> Result<String> {
    let trimmed = extension.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(Error::configuration(extension, "extension must not be empty"));
    }
    Ok(format!(".{}", bare.to_lowercase()))
}
