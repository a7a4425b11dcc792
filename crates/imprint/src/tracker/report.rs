//! Text rendering of the dependency map for diagnostics.

use std::fmt::Write as _;
use std::path::Path;

use rustc_hash::FxHashSet as HashSet;

use super::state::DependencyMap;
use crate::dep_path::DependencyPath;

/// Render every dependency with its direct dependents.
///
/// ```text
/// ┬ src/_colors.scss
/// ├── src/main.scss
/// └── src/theme.scss
/// ```
pub(crate) fn render_map(map: &DependencyMap, base: Option<&Path>) -> String {
    if map.is_empty() {
        return "(no dependencies tracked)\n".to_string();
    }

    let mut out = String::new();
    for dependency in map.keys() {
        let _ = writeln!(out, "┬ {}", dependency.display_relative(base));
        let mut visited = HashSet::default();
        render_children(map, dependency, "", base, false, &mut visited, &mut out);
    }
    out
}

/// Render the dependents of one path, optionally all the way up.
///
/// Paths already printed elsewhere in the tree are listed but not expanded
/// again, which also keeps cycles finite.
pub(crate) fn render_dependents(
    map: &DependencyMap,
    root: &DependencyPath,
    recursive: bool,
    base: Option<&Path>,
) -> String {
    let mut out = String::new();
    if map.get(root).is_none_or(|set| set.is_empty()) {
        let _ = writeln!(out, "─ {} (no dependents)", root.display_relative(base));
        return out;
    }

    let _ = writeln!(out, "┬ {}", root.display_relative(base));
    let mut visited = HashSet::default();
    visited.insert(root.clone());
    render_children(map, root, "", base, recursive, &mut visited, &mut out);
    out
}

fn render_children(
    map: &DependencyMap,
    node: &DependencyPath,
    indent: &str,
    base: Option<&Path>,
    recursive: bool,
    visited: &mut HashSet<DependencyPath>,
    out: &mut String,
) {
    let Some(children) = map.get(node) else {
        return;
    };

    let count = children.len();
    for (idx, child) in children.iter().enumerate() {
        let last = idx + 1 == count;
        let expand = recursive
            && visited.insert(child.clone())
            && map.get(child).is_some_and(|set| !set.is_empty());

        let branch = if last { "└─" } else { "├─" };
        let joint = if expand { "┬" } else { "─" };
        let _ = writeln!(out, "{indent}{branch}{joint} {}", child.display_relative(base));

        if expand {
            let nested = format!("{indent}{}", if last { "  " } else { "│ " });
            render_children(map, child, &nested, base, recursive, visited, out);
        }
    }
}
