//! [`FastTriadicStore`]: an in-memory [`Graph`] indexed three ways.

use super::bunch_map::TripleBunchMap;
use super::{Graph, TripleIter};
use crate::config::StoreConfig;
use cim_common::{classify, Node, Pattern, Result, Triple, TriplePattern};

/// A triple store indexed by subject, by predicate, and by object.
///
/// Every triple is stored three times: once as `subject -> (predicate,
/// object)` in `by_subject`, once as `predicate -> (subject, object)` in
/// `by_predicate`, and once as `object -> (subject, predicate)` in
/// `by_object`. Each index is a [`TripleBunchMap`], so a key whose bunch is
/// still small is scanned linearly and only promoted to a hash set once it
/// grows past the configured threshold.
///
/// An `_PO` query (predicate and object bound, subject unbound) has two
/// equally valid paths: scan `by_predicate[p]` filtering by object, or scan
/// `by_object[o]` filtering by predicate. The store defaults to scanning
/// the object bunch, and only switches to the predicate bunch once the
/// object bunch grows past [`StoreConfig::secondary_lookup_threshold`] and
/// the predicate bunch is smaller still.
pub struct FastTriadicStore {
    by_subject: TripleBunchMap<Node, (Node, Node)>,
    by_predicate: TripleBunchMap<Node, (Node, Node)>,
    by_object: TripleBunchMap<Node, (Node, Node)>,
    config: StoreConfig,
    len: usize,
}

impl FastTriadicStore {
    /// An empty store using the default [`StoreConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// An empty store using a custom [`StoreConfig`].
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            by_subject: TripleBunchMap::new(config.subject_promotion_threshold),
            by_predicate: TripleBunchMap::new(config.predicate_object_promotion_threshold),
            by_object: TripleBunchMap::new(config.predicate_object_promotion_threshold),
            config,
            len: 0,
        }
    }

    fn find_spo(&self, s: &Node, p: &Node, o: &Node) -> TripleIter<'_> {
        let found = self.by_subject.contains(s, &(p.clone(), o.clone()));
        if found {
            Box::new(std::iter::once(Triple::new(s.clone(), p.clone(), o.clone())))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn find_sp_any(&self, s: &Node, p: &Node) -> TripleIter<'_> {
        let p = p.clone();
        let s = s.clone();
        match self.by_subject.get(&s) {
            Some(bunch) => Box::new(bunch.iter().filter(move |(bp, _)| *bp == p).map(move |(bp, bo)| {
                Triple::new(s.clone(), bp.clone(), bo.clone())
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    fn find_s_any_o(&self, s: &Node, o: &Node) -> TripleIter<'_> {
        let o = o.clone();
        let s = s.clone();
        match self.by_subject.get(&s) {
            Some(bunch) => Box::new(bunch.iter().filter(move |(_, bo)| *bo == o).map(move |(bp, bo)| {
                Triple::new(s.clone(), bp.clone(), bo.clone())
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    fn find_s_any_any(&self, s: &Node) -> TripleIter<'_> {
        let s = s.clone();
        match self.by_subject.get(&s) {
            Some(bunch) => Box::new(
                bunch
                    .iter()
                    .map(move |(p, o)| Triple::new(s.clone(), p.clone(), o.clone())),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn find_any_po(&self, p: &Node, o: &Node) -> TripleIter<'_> {
        let pred_bunch = self.by_predicate.get(p);
        let obj_bunch = self.by_object.get(o);
        let use_predicate = match (pred_bunch, obj_bunch) {
            (Some(pb), Some(ob)) => {
                ob.len() > self.config.secondary_lookup_threshold && pb.len() < ob.len()
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return Box::new(std::iter::empty()),
        };

        if use_predicate {
            let o = o.clone();
            let p = p.clone();
            Box::new(
                pred_bunch
                    .unwrap()
                    .iter()
                    .filter(move |(_, bo)| *bo == o)
                    .map(move |(bs, bo)| Triple::new(bs.clone(), p.clone(), bo.clone())),
            )
        } else {
            let o = o.clone();
            let p = p.clone();
            Box::new(
                obj_bunch
                    .unwrap()
                    .iter()
                    .filter(move |(_, bp)| *bp == p)
                    .map(move |(bs, bp)| Triple::new(bs.clone(), bp.clone(), o.clone())),
            )
        }
    }

    fn find_any_p_any(&self, p: &Node) -> TripleIter<'_> {
        let p = p.clone();
        match self.by_predicate.get(&p) {
            Some(bunch) => Box::new(
                bunch
                    .iter()
                    .map(move |(s, o)| Triple::new(s.clone(), p.clone(), o.clone())),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn find_any_any_o(&self, o: &Node) -> TripleIter<'_> {
        let o = o.clone();
        match self.by_object.get(&o) {
            Some(bunch) => Box::new(
                bunch
                    .iter()
                    .map(move |(s, p)| Triple::new(s.clone(), p.clone(), o.clone())),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn find_any_any_any(&self) -> TripleIter<'_> {
        Box::new(self.by_subject.iter().flat_map(|(s, bunch)| {
            let s = s.clone();
            bunch
                .iter()
                .map(move |(p, o)| Triple::new(s.clone(), p.clone(), o.clone()))
        }))
    }
}

impl Default for FastTriadicStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for FastTriadicStore {
    fn add(&mut self, triple: Triple) -> Result<bool> {
        let inserted_subject = self
            .by_subject
            .insert(triple.subject.clone(), (triple.predicate.clone(), triple.object.clone()));
        if !inserted_subject {
            return Ok(false);
        }
        self.by_predicate
            .insert(triple.predicate.clone(), (triple.subject.clone(), triple.object.clone()));
        self.by_object
            .insert(triple.object.clone(), (triple.subject.clone(), triple.predicate.clone()));
        self.len += 1;
        Ok(true)
    }

    fn remove(&mut self, triple: &Triple) -> Result<bool> {
        let removed = self
            .by_subject
            .remove(&triple.subject, &(triple.predicate.clone(), triple.object.clone()));
        if !removed {
            return Ok(false);
        }
        self.by_predicate
            .remove(&triple.predicate, &(triple.subject.clone(), triple.object.clone()));
        self.by_object
            .remove(&triple.object, &(triple.subject.clone(), triple.predicate.clone()));
        self.len -= 1;
        Ok(true)
    }

    fn contains(&self, pattern: &TriplePattern) -> bool {
        match classify(pattern) {
            Pattern::Spo => self
                .by_subject
                .contains(&pattern.subject, &(pattern.predicate.clone(), pattern.object.clone())),
            _ => self.find(pattern).next().is_some(),
        }
    }

    fn find(&self, pattern: &TriplePattern) -> TripleIter<'_> {
        match classify(pattern) {
            Pattern::Spo => self.find_spo(&pattern.subject, &pattern.predicate, &pattern.object),
            Pattern::SpAny => self.find_sp_any(&pattern.subject, &pattern.predicate),
            Pattern::SAnyO => self.find_s_any_o(&pattern.subject, &pattern.object),
            Pattern::SAnyAny => self.find_s_any_any(&pattern.subject),
            Pattern::AnyPo => self.find_any_po(&pattern.predicate, &pattern.object),
            Pattern::AnyPAny => self.find_any_p_any(&pattern.predicate),
            Pattern::AnyAnyO => self.find_any_any_o(&pattern.object),
            Pattern::AnyAnyAny => self.find_any_any_any(),
        }
    }

    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.by_subject.clear();
        self.by_predicate.clear();
        self.by_object.clear();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(Node::iri(s), Node::iri(p), Node::iri(o))
    }

    #[test]
    fn add_is_idempotent() {
        let mut store = FastTriadicStore::new();
        let t = triple("http://ex/s", "http://ex/p", "http://ex/o");
        assert!(store.add(t.clone()).unwrap());
        assert!(!store.add(t.clone()).unwrap());
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn remove_then_contains_is_false() {
        let mut store = FastTriadicStore::new();
        let t = triple("http://ex/s", "http://ex/p", "http://ex/o");
        store.add(t.clone()).unwrap();
        assert!(store.remove(&t).unwrap());
        assert!(!store.contains(&t));
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn all_eight_patterns_agree_on_membership() {
        let mut store = FastTriadicStore::new();
        let t = triple("http://ex/s", "http://ex/p", "http://ex/o");
        store.add(t.clone()).unwrap();

        let any = Node::Any;
        let s = Node::iri("http://ex/s");
        let p = Node::iri("http://ex/p");
        let o = Node::iri("http://ex/o");

        assert!(store.contains(&Triple::new(s.clone(), p.clone(), o.clone())));
        assert_eq!(store.find(&Triple::new(s.clone(), p.clone(), any.clone())).count(), 1);
        assert_eq!(store.find(&Triple::new(s.clone(), any.clone(), o.clone())).count(), 1);
        assert_eq!(store.find(&Triple::new(s.clone(), any.clone(), any.clone())).count(), 1);
        assert_eq!(store.find(&Triple::new(any.clone(), p.clone(), o.clone())).count(), 1);
        assert_eq!(store.find(&Triple::new(any.clone(), p.clone(), any.clone())).count(), 1);
        assert_eq!(store.find(&Triple::new(any.clone(), any.clone(), o.clone())).count(), 1);
        assert_eq!(store.find(&Triple::new(any.clone(), any.clone(), any.clone())).count(), 1);
    }

    #[test]
    fn promotion_threshold_does_not_change_query_results() {
        let mut store = FastTriadicStore::new();
        let s = Node::iri("http://ex/s");
        for i in 0..50 {
            store
                .add(Triple::new(s.clone(), Node::iri(format!("http://ex/p{i}")), Node::iri("http://ex/o")))
                .unwrap();
        }
        assert_eq!(store.find(&Triple::new(s, Node::Any, Node::Any)).count(), 50);
    }

    #[test]
    fn clear_empties_all_indices() {
        let mut store = FastTriadicStore::new();
        store.add(triple("http://ex/s", "http://ex/p", "http://ex/o")).unwrap();
        store.clear();
        assert_eq!(store.size(), 0);
        assert_eq!(store.find(&Triple::new(Node::Any, Node::Any, Node::Any)).count(), 0);
    }
}
