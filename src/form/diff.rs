use std::hash::Hash;

use indexmap::IndexSet;
use serde::Serialize;

/// Elements that appeared and disappeared between two collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetDiff<T> {
    pub added: Vec<T>,
    pub removed: Vec<T>,
}

impl<T> SetDiff<T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl<T> Default for SetDiff<T> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
        }
    }
}

/// Compares `before` and `after` as sets.
///
/// Both sides are deduplicated first; results keep the order of first occurrence in their
/// source collection.
pub fn diff<T>(before: &[T], after: &[T]) -> SetDiff<T>
where
    T: Eq + Hash + Clone,
{
    let before: IndexSet<&T> = before.iter().collect();
    let after: IndexSet<&T> = after.iter().collect();
    SetDiff {
        added: after.difference(&before).map(|item| (*item).clone()).collect(),
        removed: before.difference(&after).map(|item| (*item).clone()).collect(),
    }
}
