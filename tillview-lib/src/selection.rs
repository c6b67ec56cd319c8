//! Key-based selection state
//!
//! Selection tracks record keys, not positions, so it stays stable across
//! filter and page changes and can be reconciled against the record set
//! whenever a refetch replaces it.

use std::collections::HashSet;
use std::hash::Hash;

/// The set of record keys the user has selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<K: Eq + Hash + Clone> {
    selected: HashSet<K>,
}

impl<K: Eq + Hash + Clone> SelectionSet<K> {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Toggles a key: adds it if absent, removes it if present.
    ///
    /// Returns `true` if the key is selected afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Checks if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Returns the number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Checks if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops every key not present in `live_keys`.
    ///
    /// Called after the record set is replaced, so the selection never holds
    /// keys of records a mutation removed.
    pub fn prune(&mut self, live_keys: &HashSet<K>) {
        self.selected.retain(|key| live_keys.contains(key));
    }

    /// Iterates over the selected keys in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    /// Read-only view of the selected keys.
    pub fn as_set(&self) -> &HashSet<K> {
        &self.selected
    }
}

impl<K: Eq + Hash + Clone> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
