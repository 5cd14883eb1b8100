//! [`RoaringStore`]: a slot-indexed [`Graph`] backed by `RoaringBitmap`s.

use super::{Graph, TripleIter};
use crate::config::StoreConfig;
use cim_common::{classify, FxHashMap, Node, Pattern, Result, Triple, TriplePattern};
use rayon::prelude::*;
use roaring::RoaringBitmap;

/// A triple store that assigns every triple a stable `u32` slot id and
/// indexes `node -> bitmap of slots` for each of the three components.
///
/// Existence and two-component queries reduce to a bitmap intersection
/// (`RoaringBitmap::and`) rather than a bunch scan, which makes this store
/// favor very large graphs and set-algebra-heavy access patterns over the
/// per-insert cost of maintaining three bitmaps. Slots freed by [`remove`]
/// are reused by later [`add`] calls via a free-slot stack, so a store that
/// churns triples does not grow its slot space unboundedly.
///
/// [`add`]: Graph::add
/// [`remove`]: Graph::remove
pub struct RoaringStore {
    slots: Vec<Option<Triple>>,
    free_slots: Vec<u32>,
    triple_to_slot: FxHashMap<Triple, u32>,
    by_subject: FxHashMap<Node, RoaringBitmap>,
    by_predicate: FxHashMap<Node, RoaringBitmap>,
    by_object: FxHashMap<Node, RoaringBitmap>,
    config: StoreConfig,
}

impl RoaringStore {
    /// An empty store using the default [`StoreConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// An empty store using a custom [`StoreConfig`].
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            slots: Vec::new(),
            free_slots: Vec::new(),
            triple_to_slot: FxHashMap::default(),
            by_subject: FxHashMap::default(),
            by_predicate: FxHashMap::default(),
            by_object: FxHashMap::default(),
            config,
        }
    }

    fn allocate_slot(&mut self) -> Result<u32> {
        if let Some(slot) = self.free_slots.pop() {
            return Ok(slot);
        }
        let slot = u32::try_from(self.slots.len()).map_err(|_| {
            cim_common::Error::IllegalArgument("roaring store slot space exhausted".to_string())
        })?;
        self.slots.push(None);
        Ok(slot)
    }

    fn triple_at(&self, slot: u32) -> Option<Triple> {
        self.slots.get(slot as usize).and_then(Clone::clone)
    }

    /// The bitmap of slots matching `pattern`, or `None` when the pattern
    /// has no bound component (`___`) and every slot matches.
    fn matching_bitmap(&self, pattern: &TriplePattern) -> Option<RoaringBitmap> {
        let subject = (!pattern.subject.is_any()).then(|| self.by_subject.get(&pattern.subject));
        let predicate =
            (!pattern.predicate.is_any()).then(|| self.by_predicate.get(&pattern.predicate));
        let object = (!pattern.object.is_any()).then(|| self.by_object.get(&pattern.object));

        let mut bitmaps: Vec<&RoaringBitmap> = Vec::with_capacity(3);
        for bound in [subject, predicate, object] {
            match bound {
                Some(Some(bitmap)) => bitmaps.push(bitmap),
                Some(None) => return Some(RoaringBitmap::new()),
                None => {}
            }
        }

        match bitmaps.split_first() {
            None => None,
            Some((first, rest)) => {
                let mut acc = (*first).clone();
                for bitmap in rest {
                    acc &= *bitmap;
                }
                Some(acc)
            }
        }
    }
}

impl Default for RoaringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for RoaringStore {
    fn add(&mut self, triple: Triple) -> Result<bool> {
        if self.triple_to_slot.contains_key(&triple) {
            return Ok(false);
        }
        let slot = self.allocate_slot()?;
        self.by_subject.entry(triple.subject.clone()).or_default().insert(slot);
        self.by_predicate.entry(triple.predicate.clone()).or_default().insert(slot);
        self.by_object.entry(triple.object.clone()).or_default().insert(slot);
        self.slots[slot as usize] = Some(triple.clone());
        self.triple_to_slot.insert(triple, slot);
        Ok(true)
    }

    fn remove(&mut self, triple: &Triple) -> Result<bool> {
        let Some(slot) = self.triple_to_slot.remove(triple) else {
            return Ok(false);
        };
        self.slots[slot as usize] = None;
        self.free_slots.push(slot);

        for (key, index) in [
            (&triple.subject, &mut self.by_subject),
            (&triple.predicate, &mut self.by_predicate),
            (&triple.object, &mut self.by_object),
        ] {
            if let Some(bitmap) = index.get_mut(key) {
                bitmap.remove(slot);
                if bitmap.is_empty() {
                    index.remove(key);
                }
            }
        }
        Ok(true)
    }

    fn contains(&self, pattern: &TriplePattern) -> bool {
        if classify(pattern) == Pattern::Spo {
            return self.triple_to_slot.contains_key(pattern);
        }
        match self.matching_bitmap(pattern) {
            Some(bitmap) => !bitmap.is_empty(),
            None => self.size() > 0,
        }
    }

    fn find(&self, pattern: &TriplePattern) -> TripleIter<'_> {
        match self.matching_bitmap(pattern) {
            Some(bitmap) => Box::new(bitmap.into_iter().filter_map(move |slot| self.triple_at(slot))),
            None => Box::new(self.slots.iter().filter_map(Clone::clone)),
        }
    }

    fn stream(&self, pattern: &TriplePattern) -> Vec<Triple> {
        let slots: Vec<u32> = match self.matching_bitmap(pattern) {
            Some(bitmap) => bitmap.into_iter().collect(),
            None => (0..self.slots.len() as u32).collect(),
        };
        let batch_size = self.config.batch_size.max(1);
        slots
            .par_chunks(batch_size)
            .flat_map_iter(|chunk| chunk.iter().filter_map(|&slot| self.triple_at(slot)))
            .collect()
    }

    fn size(&self) -> usize {
        self.triple_to_slot.len()
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free_slots.clear();
        self.triple_to_slot.clear();
        self.by_subject.clear();
        self.by_predicate.clear();
        self.by_object.clear();
    }

    /// Compacts every slot bitmap (`RoaringBitmap::run_optimize`) now that
    /// ingestion has settled, trading a one-time pass for smaller bitmaps
    /// and faster set algebra on the finished store.
    fn finalize(&mut self) {
        for bitmap in self.by_subject.values_mut() {
            bitmap.run_optimize();
        }
        for bitmap in self.by_predicate.values_mut() {
            bitmap.run_optimize();
        }
        for bitmap in self.by_object.values_mut() {
            bitmap.run_optimize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(Node::iri(s), Node::iri(p), Node::iri(o))
    }

    #[test]
    fn add_is_idempotent_and_reuses_freed_slots() {
        let mut store = RoaringStore::new();
        let a = triple("http://ex/s1", "http://ex/p", "http://ex/o");
        let b = triple("http://ex/s2", "http://ex/p", "http://ex/o");
        assert!(store.add(a.clone()).unwrap());
        assert!(!store.add(a.clone()).unwrap());
        assert!(store.add(b.clone()).unwrap());
        assert!(store.remove(&a).unwrap());
        assert_eq!(store.slots.len(), 2);
        let c = triple("http://ex/s3", "http://ex/p", "http://ex/o");
        store.add(c).unwrap();
        assert_eq!(store.slots.len(), 2, "freed slot should be reused");
    }

    #[test]
    fn bitmap_intersection_answers_two_bound_queries() {
        let mut store = RoaringStore::new();
        store.add(triple("http://ex/s", "http://ex/p1", "http://ex/o")).unwrap();
        store.add(triple("http://ex/s", "http://ex/p2", "http://ex/o")).unwrap();

        let pattern = Triple::new(Node::iri("http://ex/s"), Node::Any, Node::iri("http://ex/o"));
        assert_eq!(store.find(&pattern).count(), 2);
    }

    #[test]
    fn removal_at_scale_keeps_indices_consistent() {
        let mut store = RoaringStore::new();
        let subject = Node::iri("http://ex/s");
        for i in 0..2000 {
            store
                .add(Triple::new(
                    subject.clone(),
                    Node::iri(format!("http://ex/p{i}")),
                    Node::iri("http://ex/o"),
                ))
                .unwrap();
        }
        assert_eq!(store.size(), 2000);
        for i in 0..1000 {
            store
                .remove(&Triple::new(
                    subject.clone(),
                    Node::iri(format!("http://ex/p{i}")),
                    Node::iri("http://ex/o"),
                ))
                .unwrap();
        }
        assert_eq!(store.size(), 1000);
        let all = Triple::new(subject, Node::Any, Node::Any);
        assert_eq!(store.find(&all).count(), 1000);
    }

    #[test]
    fn parallel_stream_matches_sequential_find() {
        let mut store = RoaringStore::new();
        for i in 0..500 {
            store
                .add(Triple::new(
                    Node::iri(format!("http://ex/s{i}")),
                    Node::iri("http://ex/p"),
                    Node::iri("http://ex/o"),
                ))
                .unwrap();
        }
        let pattern = Triple::new(Node::Any, Node::iri("http://ex/p"), Node::Any);
        let mut sequential: Vec<_> = store.find(&pattern).collect();
        let mut parallel = store.stream(&pattern);
        sequential.sort_by_key(std::string::ToString::to_string);
        parallel.sort_by_key(std::string::ToString::to_string);
        assert_eq!(sequential, parallel);
    }
}
