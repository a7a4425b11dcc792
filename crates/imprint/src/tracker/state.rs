//! Graph state owned by a tracker.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet as HashSet;

use crate::dep_path::DependencyPath;
use crate::runtime::Runtime;

/// Ordered reverse-dependency map: dependency -> files importing it.
pub type DependencyMap = IndexMap<DependencyPath, IndexSet<DependencyPath>>;

#[derive(Debug, Clone, Default)]
pub(crate) struct TrackerState {
    /// Every path ever observed or referenced. Never shrinks.
    pub tracked: HashSet<DependencyPath>,
    /// Keys are present only while their dependent set is non-empty.
    pub dependents: DependencyMap,
}

impl TrackerState {
    /// Remove `dependent` from every dependent set, pruning emptied keys.
    ///
    /// Returns the number of edges removed.
    pub fn remove_dependent(&mut self, dependent: &DependencyPath) -> usize {
        let mut removed = 0;
        self.dependents.retain(|_, set| {
            if set.shift_remove(dependent) {
                removed += 1;
            }
            !set.is_empty()
        });
        removed
    }

    pub fn add_edge(&mut self, dependency: DependencyPath, dependent: DependencyPath) {
        self.dependents.entry(dependency).or_default().insert(dependent);
    }

    /// Transitive dependents of `start`, in depth-first order.
    ///
    /// Dependents that no longer exist are left out of the result, not
    /// descended into, and pruned from every dependent set.
    pub fn collect_dependents(
        &mut self,
        start: &DependencyPath,
        runtime: &dyn Runtime,
    ) -> IndexSet<DependencyPath> {
        let mut found = IndexSet::new();
        let mut missing = Vec::new();
        let mut visited = HashSet::default();
        visited.insert(start.clone());

        let mut stack: Vec<DependencyPath> = self
            .dependents
            .get(start)
            .map(|set| set.iter().rev().cloned().collect())
            .unwrap_or_default();

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }

            if !runtime.exists(current.as_path()) {
                missing.push(current);
                continue;
            }

            if let Some(next) = self.dependents.get(&current) {
                stack.extend(
                    next.iter()
                        .rev()
                        .filter(|path| !visited.contains(*path))
                        .cloned(),
                );
            }
            found.insert(current);
        }

        for path in &missing {
            let removed = self.remove_dependent(path);
            tracing::debug!(path = %path, edges = removed, "pruned missing dependent");
        }

        found
    }
}
