//! # imprint
//!
//! Import extraction and incremental reverse-dependency tracking for
//! stylesheets and similar import-based languages.
//!
//! ## Overview
//!
//! When a partial such as `_colors.scss` changes, every file that imports it,
//! directly or through other partials, has to be rebuilt as well. `imprint`
//! keeps the graph needed to answer that question across a whole build session:
//!
//! - **Extraction**: [`extract`] reduces file content through the configured
//!   [`ExtractionStep`]s and expands each reference into plausible on-disk
//!   names (`_` partials, `.scss`/`.sass` postfixes, extra base directories).
//! - **Tracking**: [`DependencyTracker`] stores who-imports-whom, replaces a
//!   file's edges every time it is seen, and returns the transitive dependents
//!   of files it already knew about.
//! - **Configuration**: [`ParserRegistry`] maps extensions to
//!   [`ParserConfig`]s. Defaults cover `.pcss`, `.less`, `.scss` and `.sass`;
//!   [`ParserOverrides`] layers JSON/TOML overrides on top.
//!
//! ## Architecture
//!
//! ```text
//! file event ──▶ DependencyTracker::update
//!                   │
//!                   ├─▶ extract (ParserRegistry) ──▶ candidate paths
//!                   ├─▶ replace edges in DependencyMap
//!                   └─▶ transitive dependents ──▶ Runtime::read_file ──▶ DependentFile
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use imprint::{DependencyTracker, ParserRegistry};
//!
//! # fn main() -> imprint::Result<()> {
//! let tracker = DependencyTracker::new(ParserRegistry::with_defaults());
//!
//! for (path, content) in [
//!     ("/project/src/main.scss", "@import 'colors';"),
//!     ("/project/src/_colors.scss", "$brand: #c00;"),
//! ] {
//!     tracker.update(path, Some(content.as_bytes()))?;
//! }
//!
//! let colors = b"$brand: #0c0;".as_slice();
//! if let Some(rebuild) = tracker.update("/project/src/_colors.scss", Some(colors))? {
//!     for file in rebuild {
//!         println!("rebuild {}", file.path);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dep_path;
pub mod error;
pub mod extract;
pub mod runtime;
pub mod tracker;

pub use config::{ParserConfig, ParserOverride, ParserOverrides, ParserRegistry, ParserSpec};
pub use dep_path::DependencyPath;
pub use error::{Error, Result, StepError};
pub use extract::{CallbackStep, ExtractionStep, PatternStep, extract, extract_with};
pub use runtime::native::NativeRuntime;
pub use runtime::{Runtime, RuntimeError, RuntimeResult};
pub use tracker::{DependencyMap, DependencyTracker, DependentFile};

#[cfg(any(test, feature = "test-utils"))]
pub use runtime::memory::MemoryRuntime;

#[cfg(test)]
mod tests;
