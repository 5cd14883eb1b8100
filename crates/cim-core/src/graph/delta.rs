//! [`DeltaGraph`]: an additions/removals overlay on top of a base graph.

use super::{FastTriadicStore, Graph, TripleIter};
use cim_common::{FxHashSet, Result, Triple, TriplePattern};

/// A graph expressed as `forward` additions and `reverse` removals applied
/// on top of a `base` graph, without mutating `base`.
///
/// Conceptually `apply(base) = (base ∪ forward) \ reverse`. [`DeltaGraph`]
/// does not hold a reference to `base`; instead every query takes the base
/// graph as an explicit argument, so the same delta can be replayed against
/// different snapshots (e.g. a `ForwardDifferences`/`ReverseDifferences`
/// pair read from CIM/XML applied to whichever dataset graph it targets).
pub struct DeltaGraph {
    forward: FastTriadicStore,
    reverse: FastTriadicStore,
}

impl DeltaGraph {
    /// An empty delta (adds nothing, removes nothing).
    #[must_use]
    pub fn new() -> Self {
        Self {
            forward: FastTriadicStore::new(),
            reverse: FastTriadicStore::new(),
        }
    }

    /// Records `triple` as an addition. A triple cannot be both a recorded
    /// addition and a recorded removal; adding it here drops any prior
    /// removal record for the same triple.
    pub fn add(&mut self, triple: Triple) -> Result<bool> {
        self.reverse.remove(&triple)?;
        self.forward.add(triple)
    }

    /// Records `triple` as a removal, dropping any prior addition record
    /// for the same triple.
    pub fn remove(&mut self, triple: Triple) -> Result<bool> {
        self.forward.remove(&triple)?;
        self.reverse.add(triple)
    }

    /// The additions this delta contributes.
    #[must_use]
    pub fn forward(&self) -> &FastTriadicStore {
        &self.forward
    }

    /// The removals this delta contributes.
    #[must_use]
    pub fn reverse(&self) -> &FastTriadicStore {
        &self.reverse
    }

    /// Whether `triple` is present in `base` once this delta is applied.
    #[must_use]
    pub fn contains(&self, base: &dyn Graph, pattern: &TriplePattern) -> bool {
        if self.reverse.contains(pattern) {
            return false;
        }
        self.forward.contains(pattern) || base.contains(pattern)
    }

    /// Every triple matching `pattern` once this delta is applied to
    /// `base`.
    #[must_use]
    pub fn find(&self, base: &dyn Graph, pattern: &TriplePattern) -> TripleIter<'_> {
        let reverse = self.reverse.find(pattern).collect::<FxHashSet<_>>();
        let from_base = base
            .find(pattern)
            .collect::<Vec<_>>()
            .into_iter()
            .filter(move |t| !reverse.contains(t));
        Box::new(from_base.chain(self.forward.find(pattern)))
    }

    /// The number of additions recorded.
    #[must_use]
    pub fn addition_count(&self) -> usize {
        self.forward.size()
    }

    /// The number of removals recorded.
    #[must_use]
    pub fn removal_count(&self) -> usize {
        self.reverse.size()
    }
}

impl Default for DeltaGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cim_common::Node;

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(Node::iri(s), Node::iri(p), Node::iri(o))
    }

    #[test]
    fn apply_is_union_of_forward_minus_reverse() {
        let mut base = FastTriadicStore::new();
        base.add(triple("http://ex/s1", "http://ex/p", "http://ex/o")).unwrap();
        base.add(triple("http://ex/s2", "http://ex/p", "http://ex/o")).unwrap();

        let mut delta = DeltaGraph::new();
        delta.add(triple("http://ex/s3", "http://ex/p", "http://ex/o")).unwrap();
        delta.remove(triple("http://ex/s1", "http://ex/p", "http://ex/o")).unwrap();

        let all = Triple::new(Node::Any, Node::iri("http://ex/p"), Node::Any);
        let result: std::collections::HashSet<_> = delta.find(&base, &all).collect();

        assert_eq!(result.len(), 2);
        assert!(result.contains(&triple("http://ex/s2", "http://ex/p", "http://ex/o")));
        assert!(result.contains(&triple("http://ex/s3", "http://ex/p", "http://ex/o")));
        assert!(!result.contains(&triple("http://ex/s1", "http://ex/p", "http://ex/o")));
    }

    #[test]
    fn adding_a_triple_cancels_a_pending_removal() {
        let mut delta = DeltaGraph::new();
        let t = triple("http://ex/s", "http://ex/p", "http://ex/o");
        delta.remove(t.clone()).unwrap();
        assert_eq!(delta.removal_count(), 1);
        delta.add(t).unwrap();
        assert_eq!(delta.removal_count(), 0);
        assert_eq!(delta.addition_count(), 1);
    }
}
