//! Declared inheritance edges between (erased) types.
//!
//! The graph stores direct supertypes only; transitive queries walk it on
//! demand. Input comes straight from user declarations, so queries must
//! terminate even when the declared edges contain a cycle.

use crate::types::TypeId;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::sync::{PoisonError, RwLock};

type ParentList = SmallVec<[TypeId; 4]>;

/// Direct-supertype adjacency for declared types.
pub struct InheritanceGraph {
    parents: RwLock<FxHashMap<TypeId, ParentList>>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        InheritanceGraph {
            parents: RwLock::new(FxHashMap::default()),
        }
    }

    /// Add `child -> parent` edges, keeping declaration order and skipping duplicates.
    pub fn add_inheritance(&self, child: TypeId, parents: &[TypeId]) {
        let mut map = self.parents.write().unwrap_or_else(PoisonError::into_inner);
        let entry = map.entry(child).or_default();
        for &parent in parents {
            if !entry.contains(&parent) {
                entry.push(parent);
            }
        }
    }

    /// Direct supertypes of `child` in declaration order.
    pub fn direct_parents(&self, child: TypeId) -> ParentList {
        self.parents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&child)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns `true` if `ancestor` is reachable from `child` through one or
    /// more declared edges. A type is not derived from itself unless the
    /// declarations contain a cycle through it.
    pub fn is_derived_from(&self, child: TypeId, ancestor: TypeId) -> bool {
        let map = self.parents.read().unwrap_or_else(PoisonError::into_inner);
        let mut visited = FxHashSet::default();
        let mut stack: Vec<TypeId> = map.get(&child).map(|p| p.to_vec()).unwrap_or_default();

        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(parents) = map.get(&current) {
                stack.extend(parents.iter().copied());
            }
        }
        false
    }

    /// Returns `true` if adding `child -> parent` would close a cycle.
    pub fn detects_cycle(&self, child: TypeId, parent: TypeId) -> bool {
        child == parent || self.is_derived_from(parent, child)
    }
}

impl Default for InheritanceGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/inheritance_tests.rs"]
mod tests;
