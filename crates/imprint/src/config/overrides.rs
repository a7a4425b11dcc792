//! Declarative parser overrides, loadable from JSON or TOML.
//!
//! Merge rules per extension key:
//! - `false` or `null` removes the extension's support entirely;
//! - `true` keeps an existing parser as is;
//! - an object replaces each field it names wholesale (no element-level merge),
//!   and a previously unknown extension must name at least one `parserSteps` entry.

use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{ParserConfig, ParserRegistry, normalize_extension};
use crate::error::{Error, Result};
use crate::extract::{ExtractionStep, PatternStep};

/// Extension-keyed overrides, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParserOverrides(IndexMap<String, Option<ParserOverride>>);

impl ParserOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the override for an extension.
    pub fn set(&mut self, extension: impl Into<String>, value: impl Into<Option<ParserOverride>>) {
        self.0.insert(extension.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Option<ParserOverride>)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Value supplied for one extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParserOverride {
    /// `false` disables, `true` keeps the default
    Toggle(bool),
    /// Field-wise replacement
    Custom(ParserSpec),
}

/// Serializable subset of [`ParserConfig`]. Steps are capture patterns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParserSpec {
    #[serde(default, alias = "parser_steps", skip_serializing_if = "Option::is_none")]
    pub parser_steps: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postfixes: Option<Vec<String>>,

    #[serde(default, alias = "base_paths", skip_serializing_if = "Option::is_none")]
    pub base_paths: Option<Vec<PathBuf>>,
}

impl ParserSpec {
    fn compile_steps(&self, extension: &str) -> Result<Option<Vec<Arc<dyn ExtractionStep>>>> {
        let Some(patterns) = &self.parser_steps else {
            return Ok(None);
        };
        if patterns.is_empty() {
            return Err(Error::configuration(
                extension,
                "parserSteps must contain at least one pattern",
            ));
        }
        let mut steps: Vec<Arc<dyn ExtractionStep>> = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let step = PatternStep::new(pattern).map_err(|err| {
                Error::configuration(extension, format!("invalid pattern '{pattern}': {err}"))
            })?;
            steps.push(Arc::new(step));
        }
        Ok(Some(steps))
    }

    fn apply_to(
        &self,
        mut config: ParserConfig,
        steps: Option<Vec<Arc<dyn ExtractionStep>>>,
    ) -> ParserConfig {
        if let Some(steps) = steps {
            config = config.with_steps(steps);
        }
        if let Some(prefixes) = &self.prefixes {
            config = config.with_prefixes(prefixes.iter().cloned());
        }
        if let Some(postfixes) = &self.postfixes {
            config = config.with_postfixes(postfixes.iter().cloned());
        }
        if let Some(base_paths) = &self.base_paths {
            config = config.with_base_paths(base_paths.iter().cloned());
        }
        config
    }
}

pub(super) fn apply_one(
    registry: &mut ParserRegistry,
    extension: &str,
    value: Option<&ParserOverride>,
) -> Result<()> {
    let key = normalize_extension(extension)?;

    match value {
        None | Some(ParserOverride::Toggle(false)) => {
            tracing::debug!(extension = %key, "disabling parser");
            registry.remove(&key);
        }
        Some(ParserOverride::Toggle(true)) => {
            if !registry.contains(&key) {
                return Err(Error::configuration(
                    key,
                    "no default parser exists; supply parserSteps to add one",
                ));
            }
        }
        Some(ParserOverride::Custom(spec)) => {
            let steps = spec.compile_steps(&key)?;
            if let Some(existing) = registry.get_mut(&key) {
                tracing::debug!(extension = %key, "overriding parser fields");
                *existing = spec.apply_to(existing.clone(), steps);
            } else {
                if steps.is_none() {
                    return Err(Error::configuration(
                        key,
                        "a new extension must supply at least one parser step",
                    ));
                }
                tracing::debug!(extension = %key, "registering parser");
                let config = spec.apply_to(ParserConfig::new(), steps);
                registry.insert_unchecked(key, config);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overrides(value: serde_json::Value) -> ParserOverrides {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn false_and_null_remove_support() {
        let mut registry = ParserRegistry::with_defaults();
        registry
            .apply_overrides(&overrides(json!({ ".less": false, ".PCSS": null })))
            .unwrap();
        assert!(!registry.contains(".less"));
        assert!(!registry.contains(".pcss"));
        assert!(registry.contains(".scss"));
    }

    #[test]
    fn true_keeps_default() {
        let mut registry = ParserRegistry::with_defaults();
        registry.apply_overrides(&overrides(json!({ ".scss": true }))).unwrap();
        assert_eq!(registry.get(".scss").unwrap().prefixes(), ["_"]);
    }

    #[test]
    fn fields_replace_defaults_wholesale() {
        let mut registry = ParserRegistry::with_defaults();
        registry
            .apply_overrides(&overrides(json!({
                ".scss": { "postfixes": [".scss"], "basePaths": ["node_modules"] }
            })))
            .unwrap();

        let scss = registry.get(".scss").unwrap();
        assert_eq!(scss.postfixes(), [".scss"]);
        assert_eq!(scss.base_paths(), [PathBuf::from("node_modules")]);
        // untouched fields keep their defaults
        assert_eq!(scss.prefixes(), ["_"]);
        assert_eq!(scss.steps().len(), 2);
    }

    #[test]
    fn new_extension_requires_steps() {
        let mut registry = ParserRegistry::with_defaults();
        let err = registry
            .apply_overrides(&overrides(json!({ ".styl": { "postfixes": [".styl"] } })))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { ref extension, .. } if extension == ".styl"));

        let err = registry
            .apply_overrides(&overrides(json!({ ".styl": true })))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn new_extension_with_steps_registers() {
        let mut registry = ParserRegistry::with_defaults();
        registry
            .apply_overrides(&overrides(json!({
                ".styl": {
                    "parser_steps": ["@import\\s+['\"]([^'\"]+)['\"]"],
                    "postfixes": [".styl"]
                }
            })))
            .unwrap();
        let styl = registry.get(".styl").unwrap();
        assert_eq!(styl.steps().len(), 1);
        assert_eq!(styl.postfixes(), [".styl"]);
        assert!(styl.prefixes().is_empty());
    }

    #[test]
    fn failed_apply_leaves_registry_untouched() {
        let mut registry = ParserRegistry::with_defaults();
        let err = registry.apply_overrides(&overrides(json!({
            ".less": false,
            ".scss": { "parserSteps": ["(broken"] }
        })));
        assert!(err.is_err());
        assert!(registry.contains(".less"));
    }

    #[test]
    fn empty_step_list_is_rejected() {
        let mut registry = ParserRegistry::with_defaults();
        let err = registry
            .apply_overrides(&overrides(json!({ ".scss": { "parserSteps": [] } })))
            .unwrap_err();
        assert!(err.to_string().contains("at least one pattern"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<ParserOverrides, _> =
            serde_json::from_value(json!({ ".scss": { "prefix": ["_"] } }));
        assert!(result.is_err());
    }

    #[test]
    fn programmatic_set() {
        let mut ov = ParserOverrides::new();
        ov.set(".sass", ParserOverride::Toggle(false));
        let mut registry = ParserRegistry::with_defaults();
        registry.apply_overrides(&ov).unwrap();
        assert!(!registry.contains(".sass"));
    }
}
