//! [`TripleBunch`]: the per-key collection backing each of the three
//! triadic indices in [`super::fast_store::FastTriadicStore`].
//!
//! Most subjects, predicates, and objects in a real-world graph are bound
//! to only a handful of triples, so a bunch starts as a flat `Vec` and
//! promotes itself to a hash set only once it outgrows a threshold. The
//! promotion is one-way: a bunch never demotes back to array form, even if
//! items are later removed, since hashed storage is never wrong, only
//! sometimes unnecessary.

use cim_common::FxHashSet;
use std::hash::Hash;

/// A bunch of items sharing one bound component of a triple (e.g. the
/// `(predicate, object)` pairs for a given subject).
#[derive(Debug, Clone)]
pub enum TripleBunch<T> {
    /// Linear-scan storage, used while the bunch is small.
    Array(Vec<T>),
    /// Hash-set storage, used once the bunch has been promoted.
    Hashed(FxHashSet<T>),
}

impl<T: Eq + Hash + Clone> TripleBunch<T> {
    /// An empty bunch.
    #[must_use]
    pub fn new() -> Self {
        Self::Array(Vec::new())
    }

    /// Inserts `item`, promoting to hashed form if the array form would
    /// exceed `promote_at`. Returns `false` if `item` was already present.
    pub fn insert(&mut self, item: T, promote_at: usize) -> bool {
        match self {
            Self::Array(items) => {
                if items.contains(&item) {
                    return false;
                }
                items.push(item);
                if items.len() > promote_at {
                    let promoted: FxHashSet<T> = items.drain(..).collect();
                    *self = Self::Hashed(promoted);
                }
                true
            }
            Self::Hashed(set) => set.insert(item),
        }
    }

    /// Removes `item`. Never demotes back to array form.
    pub fn remove(&mut self, item: &T) -> bool {
        match self {
            Self::Array(items) => items
                .iter()
                .position(|existing| existing == item)
                .map(|pos| {
                    items.remove(pos);
                })
                .is_some(),
            Self::Hashed(set) => set.remove(item),
        }
    }

    /// Whether `item` is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Self::Array(items) => items.contains(item),
            Self::Hashed(set) => set.contains(item),
        }
    }

    /// The number of items in the bunch.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Array(items) => items.len(),
            Self::Hashed(set) => set.len(),
        }
    }

    /// Whether the bunch holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this bunch has been promoted to hashed storage.
    #[must_use]
    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }

    /// Iterates the items in the bunch, in no particular order.
    pub fn iter(&self) -> BunchIter<'_, T> {
        match self {
            Self::Array(items) => BunchIter::Array(items.iter()),
            Self::Hashed(set) => BunchIter::Hashed(set.iter()),
        }
    }
}

impl<T: Eq + Hash + Clone> Default for TripleBunch<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`TripleBunch`]'s items.
pub enum BunchIter<'a, T> {
    /// Iterating array-form storage.
    Array(std::slice::Iter<'a, T>),
    /// Iterating hashed storage.
    Hashed(hashbrown::hash_set::Iter<'a, T>),
}

impl<'a, T> Iterator for BunchIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(it) => it.next(),
            Self::Hashed(it) => it.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotes_past_threshold() {
        let mut bunch: TripleBunch<u32> = TripleBunch::new();
        for i in 0..16 {
            assert!(bunch.insert(i, 16));
        }
        assert!(!bunch.is_hashed());
        assert!(bunch.insert(16, 16));
        assert!(bunch.is_hashed());
    }

    #[test]
    fn never_demotes_after_removal() {
        let mut bunch: TripleBunch<u32> = TripleBunch::new();
        for i in 0..20 {
            bunch.insert(i, 16);
        }
        assert!(bunch.is_hashed());
        for i in 0..19 {
            bunch.remove(&i);
        }
        assert_eq!(bunch.len(), 1);
        assert!(bunch.is_hashed());
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut bunch: TripleBunch<u32> = TripleBunch::new();
        assert!(bunch.insert(1, 16));
        assert!(!bunch.insert(1, 16));
        assert_eq!(bunch.len(), 1);
    }
}
