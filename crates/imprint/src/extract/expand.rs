//! Candidate expansion: prefixed, postfixed and base-path variants.
//!
//! Each stage runs over everything accumulated so far, so variants compose:
//! `colors` with prefix `_` and postfix `.scss` yields `colors`, `_colors`,
//! `colors.scss` and `_colors.scss`, and every relative one of those is then
//! also joined onto each base path. Nothing is checked against the file system.

use std::path::Path;

use crate::config::ParserConfig;
use crate::dep_path::is_absolute;

const SCHEMES: [&str; 4] = ["http:", "https:", "ftp:", "file:"];

/// `true` for references that point at a URL rather than a file.
pub(crate) fn is_url_reference(reference: &str) -> bool {
    let head = reference.trim_start();
    SCHEMES.iter().any(|scheme| {
        head.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

pub(crate) fn expand_candidates(references: Vec<String>, config: &ParserConfig) -> Vec<String> {
    let mut candidates = references;

    let prefixed: Vec<String> = candidates
        .iter()
        .flat_map(|candidate| {
            config
                .prefixes()
                .iter()
                .map(move |prefix| with_prefix(candidate, prefix))
        })
        .collect();
    candidates.extend(prefixed);

    let postfixed: Vec<String> = candidates
        .iter()
        .flat_map(|candidate| {
            config
                .postfixes()
                .iter()
                .map(move |postfix| format!("{candidate}{postfix}"))
        })
        .collect();
    candidates.extend(postfixed);

    let based: Vec<String> = candidates
        .iter()
        .filter(|candidate| !is_absolute(Path::new(candidate.as_str())))
        .flat_map(|candidate| {
            config
                .base_paths()
                .iter()
                .map(move |base| base.join(candidate).to_string_lossy().into_owned())
        })
        .collect();
    candidates.extend(based);

    candidates
}

/// Insert `prefix` before the file name, keeping the directory part.
fn with_prefix(candidate: &str, prefix: &str) -> String {
    match candidate.rfind(['/', '\\']) {
        Some(idx) => format!("{}{}{}", &candidate[..=idx], prefix, &candidate[idx + 1..]),
        None => format!("{prefix}{candidate}"),
    }
}
