//! Built-in parsers for the supported stylesheet languages.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::config::ParserConfig;
use crate::extract::{CallbackStep, ExtractionStep, PatternStep};

/// One quoted or `url()` path, one capture group per form.
const QUOTED_OR_URL: &str = r#"url\(\s*["']?([^"')]+?)["']?\s*\)|"([^"]+)"|'([^']+)'"#;

static PCSS_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"@import\s+(?:{QUOTED_OR_URL})"))
});

// Less allows `@import (reference) "file";` style options before the path.
static LESS_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"@import\s+(?:\([^)]*\)\s*)?(?:{QUOTED_OR_URL})"))
});

// Whole `@import`/`@use`/`@forward` argument list, comma separated.
static SCSS_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"@(?:import|use|forward)\s+((?:(?:url\([^)]*\)|"[^"]*"|'[^']*')\s*,?\s*)+)"#)
});

static SCSS_PATHS: LazyLock<Regex> = LazyLock::new(|| compile(QUOTED_OR_URL));

// Indented syntax: only single-line statements are recognized.
static SASS_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?m)^[ \t]*@(?:import|use|forward)[ \t]+([^\r\n]+)")
});

/// The patterns above are literals checked by the tests in this module.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("built-in pattern failed to compile: {err}"),
    }
}

fn pattern(regex: &LazyLock<Regex>) -> Arc<dyn ExtractionStep> {
    Arc::new(PatternStep::from(Regex::clone(regex)))
}

pub(crate) fn default_parsers() -> Vec<(&'static str, ParserConfig)> {
    vec![
        (
            ".pcss",
            ParserConfig::new()
                .with_steps(vec![pattern(&PCSS_IMPORT)])
                .with_postfixes([".pcss"]),
        ),
        (
            ".less",
            ParserConfig::new()
                .with_steps(vec![pattern(&LESS_IMPORT)])
                .with_postfixes([".less"]),
        ),
        (
            ".scss",
            ParserConfig::new()
                .with_steps(vec![pattern(&SCSS_STATEMENT), pattern(&SCSS_PATHS)])
                .with_prefixes(["_"])
                .with_postfixes([".scss", ".sass"]),
        ),
        (
            ".sass",
            ParserConfig::new()
                .with_steps(vec![
                    pattern(&SASS_STATEMENT),
                    Arc::new(CallbackStep::infallible("sass-import-list", split_sass_list)),
                ])
                .with_prefixes(["_"])
                .with_postfixes([".scss", ".sass"]),
        ),
    ]
}

/// Split an indented-syntax argument list such as `a, "b", url(c) ;` into paths.
///
/// Quotes and `url()` wrappers are optional. Anything after the first path
/// token of an entry (`as ns`, `with (...)`) is ignored.
fn split_sass_list(list: &str) -> Vec<String> {
    list.split(',')
        .filter_map(|entry| {
            let entry = entry.trim().trim_end_matches(';').trim();
            let path = if let Some(rest) = entry.strip_prefix("url(") {
                rest.split(')').next().unwrap_or("").trim().trim_matches(['"', '\''])
            } else if let Some(quote) = entry.chars().next().filter(|c| *c == '"' || *c == '\'') {
                entry[1..].split(quote).next().unwrap_or("")
            } else {
                entry.split_whitespace().next().unwrap_or("")
            };
            (!path.is_empty()).then(|| path.to_string())
        })
        .collect()
}
