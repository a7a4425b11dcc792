//! Dependency extraction pipeline.
//!
//! ```text
//! content ─▶ step 1 ─▶ … ─▶ step n ─▶ drop URLs ─▶ prefix ─▶ postfix ─▶ base paths
//!                                                                        │
//!                        absolute DependencyPaths ◀─ resolve ◀─ dedupe ◀─┘
//! ```
//!
//! The pipeline only matches text. It never checks whether a candidate exists,
//! which lets the tracker register imports of files that have not been
//! written yet.

mod expand;
mod step;

use std::path::PathBuf;

use indexmap::IndexSet;
use path_clean::PathClean;

use crate::config::{ParserConfig, ParserRegistry};
use crate::dep_path::DependencyPath;
use crate::error::{Error, Result};

pub use step::{CallbackStep, ExtractionStep, PatternStep};

/// Extract every path `file` may depend on.
///
/// Returns `Ok(None)` when `extension` has no registered parser, which is how
/// callers tell "not a tracked file type" apart from "no imports"
/// (`Ok(Some(empty))`).
///
/// ```rust
/// use imprint::{extract, DependencyPath, ParserRegistry};
/// use std::path::Path;
///
/// let registry = ParserRegistry::with_defaults();
/// let file = DependencyPath::new("/project/src/main.scss").unwrap();
/// let deps = extract(&registry, &file, "@import \"colors\";", ".scss")
///     .unwrap()
///     .unwrap();
///
/// assert!(deps.iter().any(|d| d.as_path() == Path::new("/project/src/_colors.scss")));
/// assert!(extract(&registry, &file, "", ".txt").unwrap().is_none());
/// ```
pub fn extract(
    registry: &ParserRegistry,
    file: &DependencyPath,
    content: &str,
    extension: &str,
) -> Result<Option<IndexSet<DependencyPath>>> {
    let Some(config) = registry.get(extension) else {
        return Ok(None);
    };

    extract_with(config, file, content, extension).map(Some)
}

/// Run one parser configuration over `content`.
pub fn extract_with(
    config: &ParserConfig,
    file: &DependencyPath,
    content: &str,
    extension: &str,
) -> Result<IndexSet<DependencyPath>> {
    let references = reduce(config, content, extension)?;

    let references: Vec<String> = references
        .into_iter()
        .filter(|reference| !reference.trim().is_empty() && !expand::is_url_reference(reference))
        .collect();

    let candidates = expand::expand_candidates(references, config);
    tracing::trace!(
        file = %file,
        candidates = candidates.len(),
        "expanded import candidates"
    );

    let unique: IndexSet<PathBuf> = candidates
        .iter()
        .map(|candidate| PathBuf::from(candidate).clean())
        .collect();

    let base_dir = file.parent_dir();
    Ok(unique
        .iter()
        .map(|candidate| DependencyPath::resolve(base_dir, candidate))
        .collect())
}

fn reduce(config: &ParserConfig, content: &str, extension: &str) -> Result<Vec<String>> {
    let mut values = vec![content.to_string()];
    for step in config.steps() {
        values = step.reduce(&values).map_err(|source| Error::Extraction {
            extension: extension.to_string(),
            step: step.name().into_owned(),
            source,
        })?;
        if values.is_empty() {
            break;
        }
    }
    Ok(values)
}
